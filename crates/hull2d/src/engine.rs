//! The hull contract shared by all engines.
//!
//! Every engine takes a mutable point buffer, reorders it in place and returns
//! `h` such that `points[..h]` is the hull vertex set. The buffer stays a
//! permutation of its input. Only `GrahamScan` promises counter-clockwise order.

use std::fmt;
use std::str::FromStr;

use crate::graham::GrahamScan;
use crate::point::Point;
use crate::quickhull::QuickHull;
use crate::segmented::SegmentedHull;

/// A convex hull algorithm operating in place on a point buffer.
pub trait HullEngine {
    fn name(&self) -> &'static str;

    /// Reorder `points` so the first `h` entries are the hull vertices; return `h`.
    fn hull(&mut self, points: &mut [Point]) -> usize;

    /// Iteration count of the last run, for engines that iterate.
    fn rounds(&self) -> Option<usize> {
        None
    }
}

/// Engine selector used by configs, the run context and the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
    Graham,
    QuickHull,
    Segmented,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::Graham, Engine::QuickHull, Engine::Segmented];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Graham => "graham",
            Engine::QuickHull => "quickhull",
            Engine::Segmented => "segmented",
        }
    }

    /// Fresh engine instance; `capacity` pre-sizes the segmented working arrays.
    pub fn instantiate(&self, capacity: usize) -> Box<dyn HullEngine + Send> {
        match self {
            Engine::Graham => Box::new(GrahamScan),
            Engine::QuickHull => Box::new(QuickHull),
            Engine::Segmented => Box::new(SegmentedHull::with_capacity(capacity)),
        }
    }

    /// Whether the engine's output prefix is in counter-clockwise order.
    pub fn is_ordered(&self) -> bool {
        matches!(self, Engine::Graham)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown engine name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownEngine(pub String);

impl fmt::Display for UnknownEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown engine `{}` (expected graham, quickhull or segmented)",
            self.0
        )
    }
}

impl std::error::Error for UnknownEngine {}

impl FromStr for Engine {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graham" | "angular" => Ok(Engine::Graham),
            "quickhull" | "divide" => Ok(Engine::QuickHull),
            "segmented" | "parallel" => Ok(Engine::Segmented),
            _ => Err(UnknownEngine(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for e in Engine::ALL {
            assert_eq!(e.as_str().parse::<Engine>().unwrap(), e);
            assert_eq!(e.instantiate(4).name(), e.as_str());
        }
        assert_eq!(" QuickHull ".parse::<Engine>().unwrap(), Engine::QuickHull);
        let err = "jarvis".parse::<Engine>().unwrap_err();
        assert!(err.to_string().contains("jarvis"));
    }
}
