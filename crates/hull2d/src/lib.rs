//! Planar convex hulls: three interchangeable in-place engines and a run
//! context that benchmarks them on seeded point clouds.
//!
//! Engines
//! - `graham`: angular scan, the only one with counter-clockwise output.
//! - `quickhull`: recursive divide, sequential.
//! - `segmented`: the divide scheme as a bulk-parallel fixed-point iteration.
//!
//! All engines reorder a caller-owned `&mut [Point]` and return `h` such that
//! the first `h` entries are the hull vertices; the buffer stays a permutation
//! of its input. Sign decisions are exact (`Point::orient`, `Point::cmp_offset`);
//! `validate` holds the tolerance-based checks used by tests and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated convenience surface.

pub mod api;
pub mod collinear;
pub mod context;
pub mod engine;
pub mod error;
pub mod graham;
pub mod ops;
pub mod point;
pub mod quickhull;
pub mod sample;
pub mod segmented;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use context::{HullConfig, HullContext, RunReport};
pub use engine::{Engine, HullEngine};
pub use error::{ConfigError, HullError};
pub use nalgebra::Vector2 as Vec2;
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{convex_hull, convex_hull_ccw};
    pub use crate::context::{HullConfig, HullContext, RunReport};
    pub use crate::engine::{Engine, HullEngine};
    pub use crate::graham::GrahamScan;
    pub use crate::point::Point;
    pub use crate::quickhull::QuickHull;
    pub use crate::sample::Dataset;
    pub use crate::segmented::SegmentedHull;
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise. Used by the Python bindings.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    Point::cross(a.into(), b.into())
}
