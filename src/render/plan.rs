use crate::{
    config::SierpinskiConfig,
    foundation::{
        core::{Canvas, Rgba8},
        error::{SierpinskiError, SierpinskiResult},
    },
    geometry::triangle::Triangle,
    render::surface::{Surface, render},
};

/// One host paint call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Switch the fill color.
    SetColor {
        /// New fill color.
        color: Rgba8,
    },
    /// Fill a triangle with the current color.
    FillPolygon {
        /// Triangle to fill.
        triangle: Triangle,
    },
}

/// Recorded paint calls for one render, in issue order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawPlan {
    /// Extent the ops were recorded for.
    pub canvas: Canvas,
    /// Paint calls.
    pub ops: Vec<DrawOp>,
}

impl DrawPlan {
    /// Empty plan that records whatever is painted onto it.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    /// Run [`render`] against a recording surface.
    pub fn record(config: &SierpinskiConfig) -> SierpinskiResult<Self> {
        let mut plan = Self::new(config.canvas);
        render(&mut plan, config)?;
        Ok(plan)
    }

    /// Re-issue every op onto `surface`.
    pub fn replay(&self, surface: &mut dyn Surface) {
        for op in &self.ops {
            match op {
                DrawOp::SetColor { color } => surface.set_color(*color),
                DrawOp::FillPolygon { triangle } => surface.fill_polygon(triangle),
            }
        }
    }

    /// Number of fill ops.
    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillPolygon { .. }))
            .count()
    }

    /// Pretty JSON form of the plan.
    pub fn to_json_pretty(&self) -> SierpinskiResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SierpinskiError::serde(e.to_string()))
    }
}

impl Surface for DrawPlan {
    fn set_color(&mut self, color: Rgba8) {
        self.ops.push(DrawOp::SetColor { color });
    }

    fn fill_polygon(&mut self, triangle: &Triangle) {
        self.ops.push(DrawOp::FillPolygon {
            triangle: *triangle,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
