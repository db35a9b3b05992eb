//! Sierpinski triangle renderer.
//!
//! A filled upward triangle is painted, then inverted triangles are carved out
//! of it recursively until their span drops below [`MIN_SPAN`] pixels.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`SierpinskiConfig`] fixes the canvas and base triangle length.
//! 2. **Render**: [`render`] issues `set_color` / `fill_polygon` calls against any [`Surface`].
//! 3. **Rasterize** (optional): [`CpuSurface`] turns those calls into pixels ([`FrameRGBA`]).
//!
//! [`DrawPlan`] is a recording [`Surface`]: it captures the calls so they can be
//! inspected, serialized, or replayed onto another surface.
//!
//! Geometry is integer-only with truncating division, so a given config always
//! produces the same sequence of triangles.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod fractal;
mod geometry;
mod render;

pub use config::{CANVAS_SIZE, SierpinskiConfig, TRIANGLE_LENGTH};
pub use foundation::core::{BezPath, Canvas, Point, Rgba8};
pub use foundation::error::{SierpinskiError, SierpinskiResult};
pub use fractal::subdivide::{
    MIN_SPAN, Subdivision, children, subdivide, subdivision_count, subdivision_depth,
};
pub use geometry::triangle::{Triangle, base_triangle, inverted_triangle};
pub use render::cpu::{CpuSurface, FrameRGBA, render_frame};
pub use render::plan::{DrawOp, DrawPlan};
pub use render::surface::{Surface, render};
