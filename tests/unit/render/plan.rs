use super::*;
use crate::geometry::triangle::{base_triangle, inverted_triangle};

#[test]
fn record_reference_sequence() {
    let plan = DrawPlan::record(&SierpinskiConfig::default()).unwrap();

    assert_eq!(plan.canvas, Canvas::square(500));
    assert_eq!(plan.fill_count(), 1 + 1 + 1092);
    assert_eq!(plan.ops.len(), 2 + 1 + 1 + 1092);
    assert_eq!(
        &plan.ops[..4],
        &[
            DrawOp::SetColor {
                color: Rgba8::FOREGROUND
            },
            DrawOp::FillPolygon {
                triangle: base_triangle(450)
            },
            DrawOp::SetColor {
                color: Rgba8::BACKGROUND
            },
            DrawOp::FillPolygon {
                triangle: inverted_triangle(225, 450, 225)
            },
        ]
    );
}

#[test]
fn record_is_deterministic() {
    let cfg = SierpinskiConfig::default();
    assert_eq!(DrawPlan::record(&cfg).unwrap(), DrawPlan::record(&cfg).unwrap());
}

#[test]
fn replay_reproduces_ops() {
    let plan = DrawPlan::record(&SierpinskiConfig::default()).unwrap();
    let mut copy = DrawPlan::new(plan.canvas);
    plan.replay(&mut copy);
    assert_eq!(copy, plan);
}

#[test]
fn json_uses_tagged_ops() {
    let cfg = SierpinskiConfig {
        canvas: Canvas::square(16),
        triangle_length: 8,
    };
    let plan = DrawPlan::record(&cfg).unwrap();
    let json = plan.to_json_pretty().unwrap();
    assert!(json.contains("\"op\": \"set_color\""));
    assert!(json.contains("\"op\": \"fill_polygon\""));

    let back: DrawPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}
