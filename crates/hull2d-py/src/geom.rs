//! Hull bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{engine_from_py, points_from_py, points_to_py};
use hull2d::api::hull_points;
use hull2d::sample::{Dataset, PointSampler};
use hull2d::validate::sort_ccw;
use hull2d::Point;
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Hull vertices of `points`; counter-clockwise from the lexicographic minimum when `ccw`.
#[pyfunction]
#[pyo3(signature = (points, engine = "quickhull", ccw = true))]
pub fn convex_hull(points: Vec<(f64, f64)>, engine: &str, ccw: bool) -> PyResult<Vec<(f64, f64)>> {
    let engine = engine_from_py(engine)?;
    let pts = points_from_py(points)?;
    let mut hull = hull_points(&pts, engine);
    if ccw && !engine.is_ordered() {
        sort_ccw(&mut hull);
    }
    Ok(points_to_py(hull))
}

/// Signed area of the parallelogram spanned by `a` and `b`.
#[pyfunction]
pub fn cross(a: (f64, f64), b: (f64, f64)) -> f64 {
    hull2d::parallelogram_area(Vector2::new(a.0, a.1), Vector2::new(b.0, b.1))
}

/// `n` seeded points from the `disc`, `ring` or `circle` dataset.
#[pyfunction]
#[pyo3(signature = (dataset, n, seed = 42))]
pub fn sample_points(dataset: &str, n: usize, seed: u64) -> PyResult<Vec<(f64, f64)>> {
    let dataset: Dataset = dataset
        .parse()
        .map_err(|err: hull2d::ConfigError| PyValueError::new_err(err.to_string()))?;
    let mut pts = vec![Point::default(); n];
    PointSampler::new(dataset, seed).fill(&mut pts);
    Ok(points_to_py(pts))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(cross, m)?)?;
    m.add_function(wrap_pyfunction!(sample_points, m)?)?;
    Ok(())
}
