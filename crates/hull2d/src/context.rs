//! Run context: owns the buffers, generates clouds and drives the engines.
//!
//! Lifecycle
//! - `init(config, sizes)`: size every buffer once for `max(sizes)`, seed the
//!   sampler, instantiate the configured engines.
//! - `calculate(n)`: draw `n` fresh points, run each engine on its own copy,
//!   keep the last engine's buffer as the visible result.
//! - `terminate(self)`: release everything.
//!
//! The context is the only owner of mutable state; nothing is global.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::engine::{Engine, HullEngine};
use crate::error::{ConfigError, HullError};
use crate::point::Point;
use crate::sample::{Dataset, PointSampler};

/// Run configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HullConfig {
    pub seed: u64,
    pub dataset: Dataset,
    /// Engines in execution order; the last one owns the visible result.
    pub engines: Vec<Engine>,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dataset: Dataset::Disc,
            engines: Engine::ALL.to_vec(),
        }
    }
}

/// Outcome of one engine on one cloud.
#[derive(Clone, Debug)]
pub struct EngineRun {
    pub engine: Engine,
    pub hull_count: usize,
    pub elapsed: Duration,
    pub rounds: Option<usize>,
}

/// Outcome of `HullContext::calculate`.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub n: usize,
    /// Hull count of the last configured engine.
    pub hull_count: usize,
    pub runs: Vec<EngineRun>,
}

impl RunReport {
    /// Whether every engine reported the same hull count.
    pub fn counts_agree(&self) -> bool {
        self.runs.windows(2).all(|w| w[0].hull_count == w[1].hull_count)
    }
}

/// Owner of the point buffers and engine instances for a benchmark session.
pub struct HullContext {
    sampler: PointSampler,
    source: Vec<Point>,
    points: Vec<Point>,
    engines: Vec<(Engine, Box<dyn HullEngine + Send>)>,
    n: usize,
    hull_count: usize,
}

impl HullContext {
    pub fn init(config: HullConfig, sizes: &[usize]) -> Result<Self, HullError> {
        let capacity = sizes.iter().copied().max().ok_or(ConfigError::NoSizes)?;
        if config.engines.is_empty() {
            return Err(ConfigError::NoEngines.into());
        }
        let engines = config
            .engines
            .iter()
            .map(|&e| (e, e.instantiate(capacity)))
            .collect();
        info!(
            capacity,
            dataset = %config.dataset,
            seed = config.seed,
            engines = config.engines.len(),
            "hull context ready"
        );
        Ok(Self {
            sampler: PointSampler::new(config.dataset, config.seed),
            source: vec![Point::default(); capacity],
            points: vec![Point::default(); capacity],
            engines,
            n: 0,
            hull_count: 0,
        })
    }

    /// Largest `n` accepted by `calculate`.
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    pub fn calculate(&mut self, n: usize) -> Result<RunReport, HullError> {
        let capacity = self.capacity();
        if n > capacity {
            return Err(HullError::CapacityExceeded {
                requested: n,
                capacity,
            });
        }
        self.sampler.fill(&mut self.source[..n]);

        let mut runs = Vec::with_capacity(self.engines.len());
        for (engine, imp) in self.engines.iter_mut() {
            let buf = &mut self.points[..n];
            buf.copy_from_slice(&self.source[..n]);
            let start = Instant::now();
            let hull_count = imp.hull(buf);
            let elapsed = start.elapsed();
            debug!(
                engine = imp.name(),
                n,
                hull_count,
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "engine finished"
            );
            runs.push(EngineRun {
                engine: *engine,
                hull_count,
                elapsed,
                rounds: imp.rounds(),
            });
        }

        self.n = n;
        self.hull_count = runs.last().map_or(0, |r| r.hull_count);
        Ok(RunReport {
            n,
            hull_count: self.hull_count,
            runs,
        })
    }

    /// The cloud of the last `calculate`, as generated.
    pub fn source(&self) -> &[Point] {
        &self.source[..self.n]
    }

    /// The last engine's buffer after the last `calculate`.
    pub fn points(&self) -> &[Point] {
        &self.points[..self.n]
    }

    /// Hull prefix of `points()`.
    pub fn hull(&self) -> &[Point] {
        &self.points[..self.hull_count]
    }

    pub fn terminate(self) {
        info!(capacity = self.capacity(), "hull context released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{encloses, same_vertex_set};

    #[test]
    fn init_rejects_empty_inputs() {
        let err = HullContext::init(HullConfig::default(), &[]).err();
        assert_eq!(err, Some(HullError::Config(ConfigError::NoSizes)));
        let cfg = HullConfig {
            engines: vec![],
            ..HullConfig::default()
        };
        let err = HullContext::init(cfg, &[10]).err();
        assert_eq!(err, Some(HullError::Config(ConfigError::NoEngines)));
    }

    #[test]
    fn calculate_runs_every_engine() {
        let mut ctx = HullContext::init(HullConfig::default(), &[100, 5_000, 1_000]).unwrap();
        assert_eq!(ctx.capacity(), 5_000);
        for n in [100, 5_000, 1_000] {
            let report = ctx.calculate(n).unwrap();
            assert_eq!(report.n, n);
            assert_eq!(report.runs.len(), 3);
            assert!(report.counts_agree(), "{report:?}");
            assert_eq!(ctx.points().len(), n);
            assert_eq!(ctx.hull().len(), report.hull_count);
            assert!(encloses(ctx.hull(), ctx.source(), 1e-9));
            let rounds: Vec<_> = report.runs.iter().map(|r| r.rounds).collect();
            assert!(rounds[0].is_none() && rounds[1].is_none() && rounds[2].is_some());
        }
        ctx.terminate();
    }

    #[test]
    fn capacity_is_enforced() {
        let mut ctx = HullContext::init(HullConfig::default(), &[10]).unwrap();
        let err = ctx.calculate(11).unwrap_err();
        assert_eq!(
            err,
            HullError::CapacityExceeded {
                requested: 11,
                capacity: 10
            }
        );
        assert!(err.to_string().contains("11"));
    }

    #[test]
    fn last_engine_owns_the_buffer() {
        let cfg = HullConfig {
            seed: 5,
            dataset: Dataset::Circle,
            engines: vec![Engine::QuickHull, Engine::Graham],
        };
        let mut ctx = HullContext::init(cfg.clone(), &[300]).unwrap();
        let report = ctx.calculate(300).unwrap();
        // Graham ran last, so the visible hull starts at the lexicographic minimum.
        let src = ctx.source();
        let min = src.iter().copied().fold(src[0], |a, b| if b < a { b } else { a });
        assert_eq!(ctx.hull()[0], min);

        let mut again = HullContext::init(cfg, &[300]).unwrap();
        let second = again.calculate(300).unwrap();
        assert_eq!(report.hull_count, second.hull_count);
        assert!(same_vertex_set(ctx.hull(), again.hull(), 0.0));
    }
}
