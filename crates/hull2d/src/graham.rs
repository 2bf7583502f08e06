//! Angular hull scan (Graham-style).
//!
//! The only engine with an ordering guarantee: the hull prefix is strictly
//! convex and counter-clockwise, starting at the lexicographically smallest
//! point.
//!
//! Steps
//! - Pivot = lexicographic minimum, swapped to index 0.
//! - Sort the rest by angle around the pivot (counter-clockwise first;
//!   collinear ties resolved lexicographically, i.e. nearer first).
//! - Collapse each collinear ray to its farthest point, then run the stack scan
//!   keeping strict left turns only.
//!
//! Every comparison is an exact orientation test on the input coordinates.
//! Every other point lies in the half-plane on the lexicographic far side of
//! the pivot, so the angular comparator is a total order even on nearly
//! collinear input.

use std::cmp::Ordering;

use crate::engine::HullEngine;
use crate::point::Point;

/// Stateless angular scan engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrahamScan;

impl HullEngine for GrahamScan {
    fn name(&self) -> &'static str {
        "graham"
    }

    fn hull(&mut self, points: &mut [Point]) -> usize {
        graham_scan(points)
    }
}

/// Angular scan in place; returns the hull size `m` with `points[..m]` in CCW order.
pub fn graham_scan(points: &mut [Point]) -> usize {
    let n = points.len();
    if n == 0 {
        return 0;
    }
    let min_idx = (1..n).fold(0, |best, i| {
        if points[i] < points[best] {
            i
        } else {
            best
        }
    });
    points.swap(0, min_idx);
    let pivot = points[0];

    points[1..].sort_by(|&u, &v| angular_cmp(pivot, u, v));

    // Copies of the pivot are collinear with everything and lexicographically least.
    let first = 1 + points[1..].iter().take_while(|&&p| p == pivot).count();

    let mut m = 1;
    let mut i = first;
    while i < n {
        let mut j = i;
        while j + 1 < n && Point::orient(pivot, points[j], points[j + 1]) == 0.0 {
            j += 1;
        }
        // Last of a collinear run is the farthest from the pivot.
        points.swap(m, j);
        m += 1;
        i = j + 1;
    }
    if m <= 2 {
        return m;
    }

    let mut top = 1;
    for i in 2..m {
        let cur = points[i];
        while top > 0 && Point::orient(points[top - 1], points[top], cur) <= 0.0 {
            top -= 1;
        }
        top += 1;
        points.swap(top, i);
    }
    top + 1
}

/// Polar order around the pivot.
#[inline]
fn angular_cmp(pivot: Point, u: Point, v: Point) -> Ordering {
    let o = Point::orient(pivot, u, v);
    if o > 0.0 {
        Ordering::Less
    } else if o < 0.0 {
        Ordering::Greater
    } else {
        u.lex_cmp(&v)
    }
}
