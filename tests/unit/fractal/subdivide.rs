use super::*;
use crate::foundation::core::Point;

fn collect(root: &Triangle) -> Vec<Triangle> {
    let mut out = Vec::new();
    subdivide(root, &mut |t| out.push(*t));
    out
}

fn reference_root() -> Triangle {
    inverted_triangle(225, 450, 225)
}

#[test]
fn children_anchor_on_bottom_point() {
    let root = reference_root();
    let [bl, br, top] = children(&root).unwrap();

    assert_eq!(bl, inverted_triangle(225 - 112, 450, 112));
    assert_eq!(br, inverted_triangle(225 + 112, 450, 112));
    assert_eq!(top, inverted_triangle(225, 450 - 224, 112));

    assert_eq!(bl.apex(), Point::new(113, 450));
    assert_eq!(br.apex(), Point::new(337, 450));
    assert_eq!(top.apex(), Point::new(225, 226));
    assert_eq!(top.left(), Point::new(169, 114));
}

#[test]
fn reference_config_emits_1092_triangles() {
    let out = collect(&reference_root());
    assert_eq!(out.len(), 1092);
    assert_eq!(subdivision_count(224), 1092);
    assert_eq!(subdivision_depth(224), 6);
}

#[test]
fn rerun_is_identical() {
    assert_eq!(collect(&reference_root()), collect(&reference_root()));
}

#[test]
fn first_emissions_are_depth_first() {
    let root = reference_root();
    let out = collect(&root);
    let [bl, br, top] = children(&root).unwrap();
    assert_eq!(&out[..3], &[bl, br, top]);

    let [bl_bl, bl_br, bl_top] = children(&bl).unwrap();
    assert_eq!(&out[3..6], &[bl_bl, bl_br, bl_top]);
}

#[test]
fn span_four_emits_children_only() {
    let t = inverted_triangle(20, 20, 4);
    assert_eq!(t.span(), 4);

    let out = collect(&t);
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|c| c.span() == 2));
    assert_eq!(subdivision_count(4), 3);
    assert_eq!(subdivision_depth(4), 1);
}

#[test]
fn span_below_threshold_emits_nothing() {
    for len in [0, 1, 2, 3] {
        let t = Triangle::new(Point::new(10, 10), Point::new(10 + len, 10), Point::new(11, 14));
        assert_eq!(t.span(), len);
        assert!(children(&t).is_none());
        assert!(collect(&t).is_empty());
        assert_eq!(subdivision_count(len), 0);
        assert_eq!(subdivision_depth(len), 0);
    }
}

#[test]
fn emitted_spans_never_below_two() {
    let out = collect(&reference_root());
    assert!(out.iter().all(|t| t.span() >= 2));
    assert!(out.iter().any(|t| t.span() < MIN_SPAN));
}

#[test]
fn iterator_matches_recursion() {
    let root = reference_root();
    let lazy: Vec<Triangle> = Subdivision::new(root).collect();
    assert_eq!(lazy, collect(&root));

    let small = inverted_triangle(3, 3, 3);
    assert_eq!(Subdivision::new(small).count(), 0);
}

#[test]
fn counts_match_recursion_for_many_spans() {
    for span in [4, 5, 6, 7, 9, 16, 31, 64, 100] {
        let root = inverted_triangle(500, 500, span);
        let actual = collect(&root).len() as u64;
        assert_eq!(actual, subdivision_count(root.span()), "span {span}");
    }
}
