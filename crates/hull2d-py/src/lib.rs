//! PyO3 bindings for selected `hull2d` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as lists of
//!   `(x, y)` tuples, engines as their string names.
//! - Buffers, engines and validation stay in Rust (`hull2d` crate).

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn hull2d_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", hull2d::VERSION)?;
    geom::register(m)
}
