use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use hull2d::{Engine, Point};

pub fn engine_from_py(name: &str) -> PyResult<Engine> {
    name.parse::<Engine>()
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

pub fn points_from_py(points: Vec<(f64, f64)>) -> PyResult<Vec<Vector2<f64>>> {
    points
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| {
            if x.is_finite() && y.is_finite() {
                Ok(Vector2::new(x, y))
            } else {
                Err(PyValueError::new_err(format!(
                    "point {i} has a non-finite coordinate ({x}, {y})"
                )))
            }
        })
        .collect()
}

pub fn points_to_py(points: impl IntoIterator<Item = Point>) -> Vec<(f64, f64)> {
    points.into_iter().map(<(f64, f64)>::from).collect()
}
