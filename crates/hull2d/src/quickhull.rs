//! Recursive divide hull (sequential QuickHull), fully in place.
//!
//! Layout after the top-level split: `[R, upper.. | L, lower..]` with the upper
//! half sorted descending and the lower half ascending, so `R` opens the first
//! range and `L` the second. `find_hull` then works on sub-slices whose first
//! element is the wedge anchor `u`:
//!
//! - pick the point `F` farthest from `u → v`,
//! - keep only points strictly outside `u–F` or `F–v` (relative order kept),
//! - recurse on `(u, F)` and `(F, v)`,
//! - merge both boundaries with a forward range swap.
//!
//! Side tests and the farthest-point choice are exact (`Point::orient`,
//! `Point::cmp_offset`), so the split, the wedge filters and the chord test
//! never disagree about a point.
//!
//! Output order is not guaranteed to be a CCW walk; only the vertex set is.

use std::cmp::Ordering;

use crate::collinear;
use crate::engine::HullEngine;
use crate::ops::{extremes, partition_front, swap_ranges};
use crate::point::Point;

/// Stateless recursive divide engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickHull;

impl HullEngine for QuickHull {
    fn name(&self) -> &'static str {
        "quickhull"
    }

    fn hull(&mut self, points: &mut [Point]) -> usize {
        quick_hull(points)
    }
}

/// QuickHull in place; returns `h` with `points[..h]` the hull vertex set.
pub fn quick_hull(points: &mut [Point]) -> usize {
    let Some((left, right)) = extremes(points) else {
        return 0;
    };
    if left == right {
        return 1;
    }
    let pivot = partition_front(points, |p| p == right || Point::orient(left, right, p) > 0.0);

    points[..pivot].sort_by(|a, b| b.lex_cmp(a));
    points[pivot..].sort_by(Point::lex_cmp);
    assert!(points[0] == right, "upper half must start at the max point");
    assert!(points[pivot] == left, "lower half must start at the min point");

    let left_boundary = find_hull(&mut points[..pivot], right, left);
    let mut right_boundary = pivot + find_hull(&mut points[pivot..], left, right);
    // The lower half also holds points on the chord itself; at most one of
    // them can survive and it sits right after `L`.
    if right_boundary > pivot + 1 && collinear::on_chord(left, right, points[pivot + 1]) {
        assert_eq!(pivot + 2, right_boundary, "only one chord point may survive");
        right_boundary -= 1;
    }
    swap_ranges(points, left_boundary, pivot, right_boundary - pivot)
}

/// Boundary of the wedge `u → v` over `range` (`range[0] == u`).
///
/// Returns `b` such that `range[..b]` holds `u` followed by the hull vertices
/// strictly between `u` and `v`.
fn find_hull(range: &mut [Point], u: Point, v: Point) -> usize {
    debug_assert!(range[0] == u);
    if range.len() == 1 {
        return 1;
    }

    let mut far: Option<usize> = None;
    for (i, &p) in range.iter().enumerate().skip(1) {
        if p == u || p == v {
            continue;
        }
        debug_assert!(Point::orient(u, v, p) <= 0.0, "candidate {p} lies inside the wedge");
        if far.map_or(true, |f| Point::cmp_offset(u, v, p, range[f]) == Ordering::Greater) {
            far = Some(i);
        }
    }
    let Some(far) = far else {
        return 1;
    };

    let far_p = range[far];
    let is_outerior =
        |p: Point| Point::orient(far_p, p, v) > 0.0 || Point::orient(far_p, u, p) > 0.0;

    let pivot = 1 + partition_front(&mut range[1..far], is_outerior);
    let left_boundary = find_hull(&mut range[..pivot], u, far_p);
    let pivot = far + 1 + partition_front(&mut range[far + 1..], is_outerior);
    let right_boundary = far + find_hull(&mut range[far..pivot], far_p, v);
    swap_ranges(range, left_boundary, far, right_boundary - far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::reference_hull;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn sorted(mut v: Vec<Point>) -> Vec<Point> {
        v.sort_by(Point::lex_cmp);
        v
    }

    #[test]
    fn square_with_center() {
        let mut v = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.5, 0.5)];
        let h = quick_hull(&mut v);
        assert_eq!(h, 4);
        assert_eq!(
            sorted(v[..h].to_vec()),
            vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0), p(1.0, 1.0)]
        );
        assert_eq!(v[4], p(0.5, 0.5));
    }

    #[test]
    fn collinear_chord_point_removed() {
        let mut v = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert_eq!(quick_hull(&mut v), 2);
        assert_eq!(sorted(v[..2].to_vec()), vec![p(0.0, 0.0), p(2.0, 0.0)]);
    }

    #[test]
    fn many_chord_points_with_upper_hull() {
        let mut v = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 0.0),
        ];
        let h = quick_hull(&mut v);
        assert_eq!(h, 3);
        assert_eq!(
            sorted(v[..h].to_vec()),
            vec![p(0.0, 0.0), p(1.0, 1.0), p(3.0, 0.0)]
        );
    }

    #[test]
    fn duplicates_of_extremes_dropped() {
        let mut v = vec![p(1.0, 1.0), p(0.0, 0.0), p(1.0, 1.0), p(0.0, 0.0), p(1.0, 1.0)];
        assert_eq!(quick_hull(&mut v), 2);
        let mut w = vec![p(2.0, 2.0); 4];
        assert_eq!(quick_hull(&mut w), 1);
        assert_eq!(quick_hull(&mut []), 0);
    }

    #[test]
    fn nearly_collinear_chord_points_resolved() {
        // All six lie within rounding of y = 0.1 x; the chord test and the
        // half split must classify each of them the same way.
        let mut v = vec![
            p(-4.04790804104988, -0.40479080410498797),
            p(-1.4751234115553147, -0.14751234115553147),
            p(-3.1615477657352, -0.31615477657352),
            p(-0.7350697445147736, -0.07350697445147736),
            p(-2.5946204396843653, -0.25946204396843653),
            p(-0.9562354205357515, -0.09562354205357515),
        ];
        let expected = sorted(reference_hull(&v));
        let h = quick_hull(&mut v);
        assert_eq!(sorted(v[..h].to_vec()), expected);
    }

    #[test]
    fn nearly_collinear_clouds_match_reference() {
        let mut rng = StdRng::seed_from_u64(3);
        for round in 0..20 {
            let k = [0.1, 0.3, 1.0 / 3.0][round % 3];
            let mut v: Vec<Point> = (0..200)
                .map(|_| {
                    let t: f64 = rng.gen_range(-5.0..5.0);
                    p(t, k * t + rng.gen_range(-1e-16..1e-16))
                })
                .collect();
            let expected = sorted(reference_hull(&v));
            let h = quick_hull(&mut v);
            assert_eq!(sorted(v[..h].to_vec()), expected, "round {round}");
        }
    }

    #[test]
    fn hexagon_with_center() {
        let mut v: Vec<Point> = (0..6)
            .map(|k| {
                let t = k as f64 * std::f64::consts::FRAC_PI_3;
                p(t.cos(), t.sin())
            })
            .collect();
        v.push(p(0.0, 0.0));
        let expected = sorted(v[..6].to_vec());
        let h = quick_hull(&mut v);
        assert_eq!(h, 6);
        assert_eq!(sorted(v[..h].to_vec()), expected);
    }
}
