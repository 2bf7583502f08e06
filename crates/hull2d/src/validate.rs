//! Validation helpers for hull outputs (tests, CLI `--check`, bindings).
//!
//! - `reference_hull`: Andrew's monotone chain, independent of the engines.
//! - `sort_ccw`: canonical counter-clockwise order for unordered vertex sets.
//! - `encloses`: every point on or inside the hull polygon (eps-aware).
//! - `same_vertex_set`: order-insensitive comparison of two vertex sets.
//! - `is_strictly_convex_ccw`: strict left turns and a single winding.
//!
//! Orientation signs use the same exact predicate as the engines; distances
//! and windings run on `nalgebra::Vector2` with explicit tolerances.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::point::Point;

#[inline]
fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

fn to_vecs(points: &[Point]) -> Vec<Vector2<f64>> {
    points.iter().map(|p| p.to_vec2()).collect()
}

/// Monotone chain hull in CCW order starting at the lexicographic minimum.
///
/// Collinear boundary points and exact duplicates are dropped.
pub fn reference_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(Point::lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2
            && Point::orient(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2
            && Point::orient(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}


/// Reorder a convex vertex set counter-clockwise, starting at its lexicographic minimum.
///
/// Sorts by exact orientation around the minimum, so thin hulls keep their order.
pub fn sort_ccw(hull: &mut [Point]) {
    let h = hull.len();
    if h < 3 {
        hull.sort_by(Point::lex_cmp);
        return;
    }
    let start = (1..h).fold(0, |best, i| if hull[i] < hull[best] { i } else { best });
    hull.swap(0, start);
    let pivot = hull[0];
    hull[1..].sort_by(|a, b| {
        let o = Point::orient(pivot, *a, *b);
        if o > 0.0 {
            Ordering::Less
        } else if o < 0.0 {
            Ordering::Greater
        } else {
            a.lex_cmp(b)
        }
    });
}

/// Whether every point lies on or inside the polygon spanned by `hull`.
///
/// `hull` may be in any order; it is sorted counter-clockwise internally.
/// One- and two-vertex hulls are treated as a point and a segment.
pub fn encloses(hull: &[Point], points: &[Point], eps: f64) -> bool {
    let mut poly = hull.to_vec();
    sort_ccw(&mut poly);
    let poly = to_vecs(&poly);
    match poly.len() {
        0 => points.is_empty(),
        1 => points.iter().all(|p| (p.to_vec2() - poly[0]).norm() <= eps),
        2 => {
            let (a, b) = (poly[0], poly[1]);
            let e = b - a;
            let len2 = e.norm_squared();
            points.iter().all(|p| {
                let q = p.to_vec2() - a;
                let t = (q.dot(&e) / len2).clamp(0.0, 1.0);
                (q - e * t).norm() <= eps
            })
        }
        h => {
            // Outward normal of a CCW edge is the edge rotated clockwise.
            let halfspaces: Vec<(Vector2<f64>, f64)> = (0..h)
                .filter_map(|k| {
                    let a = poly[k];
                    let e = poly[(k + 1) % h] - a;
                    let n = Vector2::new(e.y, -e.x);
                    let norm = n.norm();
                    (norm > 0.0).then(|| (n / norm, n.dot(&a) / norm))
                })
                .collect();
            points.iter().all(|p| {
                let v = p.to_vec2();
                halfspaces.iter().all(|(n, c)| n.dot(&v) <= c + eps)
            })
        }
    }
}

/// Order-insensitive vertex set equality up to `eps` per vertex.
pub fn same_vertex_set(a: &[Point], b: &[Point], eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_by(Point::lex_cmp);
    b.sort_by(Point::lex_cmp);
    a.iter()
        .zip(&b)
        .all(|(p, q)| (p.to_vec2() - q.to_vec2()).norm() <= eps)
}

/// Every consecutive triple is a strict left turn and the boundary winds once.
///
/// Sequences of fewer than three vertices pass when they are distinct.
pub fn is_strictly_convex_ccw(hull: &[Point]) -> bool {
    let h = hull.len();
    if h < 3 {
        return h < 2 || hull[0] != hull[1];
    }
    let v = to_vecs(hull);
    let mut winding = 0.0;
    for i in 0..h {
        if Point::orient(hull[i], hull[(i + 1) % h], hull[(i + 2) % h]) <= 0.0 {
            return false;
        }
        let a = v[i];
        let b = v[(i + 1) % h];
        let c = v[(i + 2) % h];
        let (e0, e1) = (b - a, c - b);
        winding += turn(a, b, c).abs().atan2(e0.dot(&e1));
    }
    (winding - TAU).abs() < 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square() -> Vec<Point> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn reference_hull_drops_interior_and_collinear() {
        let pts = vec![
            p(0.5, 0.5),
            p(1.0, 1.0),
            p(0.5, 0.0),
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(0.0, 0.0),
        ];
        assert_eq!(reference_hull(&pts), square());
        assert_eq!(reference_hull(&[p(1.0, 1.0), p(1.0, 1.0)]), vec![p(1.0, 1.0)]);
    }

    #[test]
    fn sort_ccw_starts_at_min() {
        let mut h = vec![p(1.0, 1.0), p(0.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)];
        sort_ccw(&mut h);
        assert_eq!(h, square());
        assert!(is_strictly_convex_ccw(&h));
        h.reverse();
        assert!(!is_strictly_convex_ccw(&h));
    }

    #[test]
    fn convexity_rejects_double_winding() {
        // Pentagram: every turn is a left turn, but it winds twice.
        let star: Vec<Point> = (0..5)
            .map(|k| {
                let t = (2 * k) as f64 * TAU / 5.0;
                p(t.cos(), t.sin())
            })
            .collect();
        assert!(!is_strictly_convex_ccw(&star));
        assert!(!is_strictly_convex_ccw(&[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]));
    }

    #[test]
    fn enclosure_checks() {
        let inside = [p(0.5, 0.5), p(0.0, 0.0), p(1.0, 0.5)];
        assert!(encloses(&square(), &inside, 1e-12));
        assert!(!encloses(&square(), &[p(1.1, 0.5)], 1e-12));
        let seg = [p(0.0, 0.0), p(2.0, 0.0)];
        assert!(encloses(&seg, &[p(1.0, 0.0)], 1e-12));
        assert!(!encloses(&seg, &[p(3.0, 0.0)], 1e-12));
        assert!(encloses(&[p(1.0, 1.0)], &[p(1.0, 1.0)], 0.0));
    }

    #[test]
    fn thin_hull_sorts_and_winds_once() {
        // Sliver around y = 0.3 x; centroid angles cannot separate its sides.
        let hull = vec![
            p(-1.0, -0.3),
            p(0.5, 0.15 - 1e-15),
            p(1.0, 0.3),
            p(0.25, 0.075 + 1e-15),
        ];
        let mut shuffled = vec![hull[2], hull[0], hull[3], hull[1]];
        sort_ccw(&mut shuffled);
        assert_eq!(shuffled, hull);
        assert!(is_strictly_convex_ccw(&hull));
        assert!(encloses(&hull, &[p(0.0, 0.0), p(0.5, 0.15)], 1e-9));
    }

    #[test]
    fn vertex_sets_ignore_order() {
        let mut shuffled = square();
        shuffled.swap(0, 3);
        assert!(same_vertex_set(&square(), &shuffled, 0.0));
        assert!(!same_vertex_set(&square(), &shuffled[..3], 0.0));
    }
}
