use crate::{
    config::SierpinskiConfig,
    foundation::{
        core::{BezPath, Canvas, Rgba8},
        error::SierpinskiResult,
    },
    geometry::triangle::Triangle,
    render::surface::{Surface, render},
};

/// Pixels read back from a raster surface.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8, tightly packed.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`, if it is on the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Surface rasterized on the CPU with `vello_cpu`. Starts cleared to
/// [`Rgba8::BACKGROUND`].
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    fills: u64,
}

impl CpuSurface {
    /// Allocate a surface covering `canvas`.
    pub fn new(canvas: Canvas) -> SierpinskiResult<Self> {
        let (width, height) = canvas.dims_u16()?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(to_cpu_color(Rgba8::BACKGROUND));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        Ok(Self {
            width,
            height,
            ctx,
            fills: 0,
        })
    }

    /// Number of polygons filled so far.
    pub fn fill_count(&self) -> u64 {
        self.fills
    }

    /// Rasterize everything painted so far.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        clear_pixmap(&mut pixmap, Rgba8::BACKGROUND.to_premul_bytes());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl Surface for CpuSurface {
    fn set_color(&mut self, color: Rgba8) {
        self.ctx.set_paint(to_cpu_color(color));
    }

    fn fill_polygon(&mut self, triangle: &Triangle) {
        self.ctx.fill_path(&bezpath_to_cpu(&triangle.to_bezpath()));
        self.fills += 1;
    }
}

/// Validate `config`, paint the fractal on a fresh [`CpuSurface`], read it back.
#[tracing::instrument]
pub fn render_frame(config: &SierpinskiConfig) -> SierpinskiResult<FrameRGBA> {
    config.validate()?;
    let mut surface = CpuSurface::new(config.canvas)?;
    render(&mut surface, config)?;
    tracing::debug!(fills = surface.fill_count(), "rasterizing");
    Ok(surface.finish())
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
