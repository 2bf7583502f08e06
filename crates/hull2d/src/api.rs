//! Curated convenience surface (UNSTABLE).
//!
//! - One-shot hull functions on `Vec2` input for callers that do not manage
//!   buffers (CLI `hull`, Python bindings, tests).
//! - Re-exports of the pieces most callers need.

pub use crate::context::{EngineRun, HullConfig, HullContext, RunReport};
pub use crate::engine::{Engine, HullEngine};
pub use crate::error::{ConfigError, HullError};
pub use crate::point::Point;
pub use crate::sample::{Dataset, PointSampler};
pub use crate::validate::{encloses, is_strictly_convex_ccw, same_vertex_set, sort_ccw};

use crate::Vec2;

/// Hull vertices of `points` in the engine's output order.
///
/// Only `Engine::Graham` guarantees counter-clockwise order; use
/// [`convex_hull_ccw`] when order matters.
pub fn convex_hull(points: &[Vec2<f64>], engine: Engine) -> Vec<Vec2<f64>> {
    hull_points(points, engine)
        .into_iter()
        .map(Point::to_vec2)
        .collect()
}

/// Hull vertices in counter-clockwise order from the lexicographic minimum.
pub fn convex_hull_ccw(points: &[Vec2<f64>], engine: Engine) -> Vec<Vec2<f64>> {
    let mut hull = hull_points(points, engine);
    if !engine.is_ordered() {
        sort_ccw(&mut hull);
    }
    hull.into_iter().map(Point::to_vec2).collect()
}

/// Same as [`convex_hull`] on `Point` input; the input is left untouched.
pub fn hull_points(points: &[Vec2<f64>], engine: Engine) -> Vec<Point> {
    let mut buf: Vec<Point> = points.iter().map(|&v| Point::from(v)).collect();
    let h = engine.instantiate(buf.len()).hull(&mut buf);
    buf.truncate(h);
    buf
}
