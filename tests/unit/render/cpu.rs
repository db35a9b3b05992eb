use super::*;
use crate::foundation::error::SierpinskiError;

#[test]
fn fresh_surface_is_background() {
    let frame = CpuSurface::new(Canvas::square(8)).unwrap().finish();
    assert_eq!(frame.width, 8);
    assert_eq!(frame.height, 8);
    assert_eq!(frame.data.len(), 8 * 8 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px.iter().all(|&c| c == 255)));
}

#[test]
fn filled_polygon_changes_pixels() {
    let mut s = CpuSurface::new(Canvas::square(32)).unwrap();
    s.set_color(Rgba8::FOREGROUND);
    s.fill_polygon(&crate::geometry::triangle::base_triangle(32));
    assert_eq!(s.fill_count(), 1);

    let frame = s.finish();
    // Well inside the base triangle, and outside it above the left edge.
    assert_eq!(frame.pixel(16, 28), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn oversized_canvas_is_rejected() {
    let canvas = Canvas {
        width: 70_000,
        height: 4,
    };
    assert!(matches!(
        CpuSurface::new(canvas),
        Err(SierpinskiError::Render(_))
    ));
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let frame = CpuSurface::new(Canvas::square(4)).unwrap().finish();
    assert!(frame.pixel(4, 0).is_none());
    assert!(frame.pixel(0, 4).is_none());
}
