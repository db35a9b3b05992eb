use crate::{
    config::SierpinskiConfig,
    foundation::{core::Rgba8, error::SierpinskiResult},
    fractal::subdivide::subdivide,
    geometry::triangle::{Triangle, base_triangle, inverted_triangle},
};

/// Paint primitives a host provides. Fills use the most recent `set_color`.
pub trait Surface {
    /// Change the color used by subsequent fills.
    fn set_color(&mut self, color: Rgba8);

    /// Fill a triangle with the current color.
    fn fill_polygon(&mut self, triangle: &Triangle);
}

/// Paint the whole fractal onto `surface`.
///
/// The base triangle goes down in [`Rgba8::FOREGROUND`]; the first inverted
/// triangle and every triangle carved out of it go down in [`Rgba8::BACKGROUND`].
#[tracing::instrument(skip(surface))]
pub fn render(surface: &mut dyn Surface, config: &SierpinskiConfig) -> SierpinskiResult<()> {
    config.validate()?;
    let length = config.length_px()?;

    surface.set_color(Rgba8::FOREGROUND);
    surface.fill_polygon(&base_triangle(length));

    surface.set_color(Rgba8::BACKGROUND);
    let initial = inverted_triangle(length / 2, length, length / 2);
    surface.fill_polygon(&initial);

    let mut carved = 0u64;
    subdivide(&initial, &mut |t| {
        surface.fill_polygon(t);
        carved += 1;
    });

    tracing::debug!(carved, span = initial.span(), "sierpinski render complete");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
