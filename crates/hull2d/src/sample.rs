//! Seeded point clouds for benchmark runs.
//!
//! Model
//! - Angle uniform on `[0, 2π)`, radius uniform on the dataset's range,
//!   point = `r·(cos a, sin a)`.
//! - `Disc` fills the unit disc (radius uniform, so denser near the centre),
//!   `Ring` keeps radii in `[0.9, 1]`, `Circle` puts every point on the unit
//!   circle (worst case: almost every point is a hull vertex).
//! - One `StdRng` per sampler; consecutive `fill` calls continue the stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::point::Point;

/// Radial distribution of generated points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dataset {
    #[default]
    Disc,
    Ring,
    Circle,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Disc, Dataset::Ring, Dataset::Circle];

    /// Inclusive radius range `(r_min, r_max)`.
    pub fn radius_range(&self) -> (f64, f64) {
        match self {
            Dataset::Disc => (0.0, 1.0),
            Dataset::Ring => (0.9, 1.0),
            Dataset::Circle => (1.0, 1.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Disc => "disc",
            Dataset::Ring => "ring",
            Dataset::Circle => "circle",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disc" | "disk" => Ok(Dataset::Disc),
            "ring" | "annulus" => Ok(Dataset::Ring),
            "circle" => Ok(Dataset::Circle),
            _ => Err(ConfigError::UnknownDataset {
                name: s.to_string(),
            }),
        }
    }
}

/// Deterministic point stream for one dataset.
#[derive(Clone, Debug)]
pub struct PointSampler {
    dataset: Dataset,
    rng: StdRng,
}

impl PointSampler {
    pub fn new(dataset: Dataset, seed: u64) -> Self {
        Self {
            dataset,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn sample(&mut self) -> Point {
        let (r_min, r_max) = self.dataset.radius_range();
        let a = self.rng.gen_range(0.0..TAU);
        let r = self.rng.gen_range(r_min..=r_max);
        Point::new(r * a.cos(), r * a.sin())
    }

    /// Overwrite every slot with a fresh sample.
    pub fn fill(&mut self, out: &mut [Point]) {
        for p in out.iter_mut() {
            *p = self.sample();
        }
    }
}
