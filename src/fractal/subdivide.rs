use crate::geometry::triangle::{Triangle, inverted_triangle};

/// Triangles narrower than this are neither split nor emitted further.
pub const MIN_SPAN: i32 = 4;

/// The three inverted triangles carved out around `triangle`, in paint order:
/// bottom-left, bottom-right, top-middle. `None` once the span is below [`MIN_SPAN`].
pub fn children(triangle: &Triangle) -> Option<[Triangle; 3]> {
    let span = triangle.span();
    if span < MIN_SPAN {
        return None;
    }

    let half = span / 2;
    let bottom = triangle.apex();
    Some([
        inverted_triangle(bottom.x - half, bottom.y, half),
        inverted_triangle(bottom.x + half, bottom.y, half),
        inverted_triangle(bottom.x, bottom.y - span, half),
    ])
}

/// Recursively carve `triangle`, handing every child to `emit` before descending
/// into it. The triangle itself is not emitted.
pub fn subdivide<F>(triangle: &Triangle, emit: &mut F)
where
    F: FnMut(&Triangle),
{
    let Some(kids) = children(triangle) else {
        return;
    };

    for kid in &kids {
        emit(kid);
    }
    for kid in &kids {
        subdivide(kid, emit);
    }
}

/// Lazy form of [`subdivide`] driven by an explicit work stack. Yields the same
/// triangles in the same order.
#[derive(Clone, Debug)]
pub struct Subdivision {
    pending: Vec<Triangle>,
    ready: Vec<Triangle>,
}

impl Subdivision {
    /// Start carving `root`.
    pub fn new(root: Triangle) -> Self {
        Self {
            pending: vec![root],
            ready: Vec::with_capacity(3),
        }
    }
}

impl Iterator for Subdivision {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        loop {
            if let Some(t) = self.ready.pop() {
                return Some(t);
            }

            let parent = self.pending.pop()?;
            if let Some(kids) = children(&parent) {
                // Both stacks are LIFO: push reversed so bottom-left comes out first.
                for kid in kids.iter().rev() {
                    self.ready.push(*kid);
                    self.pending.push(*kid);
                }
            }
        }
    }
}

/// Number of levels that emit children when starting from `span`.
pub fn subdivision_depth(span: i32) -> u32 {
    let mut depth = 0;
    let mut span = span;
    while span >= MIN_SPAN {
        depth += 1;
        span = child_span(span);
    }
    depth
}

/// Number of triangles [`subdivide`] emits when starting from `span`.
pub fn subdivision_count(span: i32) -> u64 {
    if span < MIN_SPAN {
        return 0;
    }
    3 + 3 * subdivision_count(child_span(span))
}

fn child_span(span: i32) -> i32 {
    // A child of length `span / 2` has corners at +/- `(span / 2) / 2`.
    2 * ((span / 2) / 2)
}

#[cfg(test)]
#[path = "../../tests/unit/fractal/subdivide.rs"]
mod tests;
