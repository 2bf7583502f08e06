//! Collinearity corrector shared by the divide engines.
//!
//! Three consecutive hull vertices that are exactly collinear make the middle
//! one a spurious vertex. QuickHull only meets this at one known spot (right
//! after `L`, on the `L–R` chord); the segmented engine checks the whole cycle.

use crate::point::Point;

/// `p` lies exactly on the line through `l` and `r`.
#[inline]
pub fn on_chord(l: Point, r: Point, p: Point) -> bool {
    Point::orient(l, r, p) == 0.0
}

/// Flag the true vertices of a cyclic vertex sequence.
///
/// `keep[i]` is cleared when `hull[i]` is exactly collinear with its cyclic
/// neighbours. Vertices equal to one of `pinned` are always kept; the
/// lexicographic extremes are hull vertices even when every point is collinear.
/// Sequences of at most two vertices are kept whole.
pub fn mark_true_vertices(hull: &[Point], pinned: [Point; 2], keep: &mut [bool]) {
    let h = hull.len();
    debug_assert!(keep.len() >= h);
    if h <= 2 {
        keep[..h].fill(true);
        return;
    }
    for (i, flag) in keep[..h].iter_mut().enumerate() {
        let cur = hull[i];
        let prev = hull[(i + h - 1) % h];
        let next = hull[(i + 1) % h];
        *flag = pinned.contains(&cur) || Point::orient(prev, cur, next) != 0.0;
    }
}
