//! Run settings: JSON config file merged with command-line flags.
//!
//! Precedence: library defaults, then the config file, then explicit flags.

use anyhow::{Context, Result};
use hull2d::{Engine, HullConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Point counts used when neither the file nor the flags name any.
pub const DEFAULT_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Optional fields of a run config file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    pub seed: Option<u64>,
    pub dataset: Option<String>,
    pub sizes: Option<Vec<usize>>,
    pub engines: Option<Vec<String>>,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Fully resolved settings for one `run` invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSettings {
    pub config: HullConfig,
    pub sizes: Vec<usize>,
}

/// Merge file values and flag overrides on top of the defaults.
pub fn resolve(file: RunFile, overrides: RunFile) -> Result<RunSettings> {
    let mut config = HullConfig::default();
    let mut sizes = DEFAULT_SIZES.to_vec();
    for layer in [file, overrides] {
        if let Some(seed) = layer.seed {
            config.seed = seed;
        }
        if let Some(name) = layer.dataset {
            config.dataset = name.parse()?;
        }
        if let Some(s) = layer.sizes.filter(|s| !s.is_empty()) {
            sizes = s;
        }
        if let Some(names) = layer.engines.filter(|e| !e.is_empty()) {
            config.engines = names
                .iter()
                .map(|n| n.parse::<Engine>())
                .collect::<Result<_, _>>()?;
        }
    }
    Ok(RunSettings { config, sizes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2d::sample::Dataset;
    use tempfile::tempdir;

    #[test]
    fn flags_override_file() {
        let file = RunFile {
            seed: Some(7),
            dataset: Some("ring".into()),
            sizes: Some(vec![10, 20]),
            engines: None,
        };
        let flags = RunFile {
            seed: Some(9),
            engines: Some(vec!["graham".into()]),
            ..RunFile::default()
        };
        let s = resolve(file, flags).unwrap();
        assert_eq!(s.config.seed, 9);
        assert_eq!(s.config.dataset, Dataset::Ring);
        assert_eq!(s.config.engines, vec![Engine::Graham]);
        assert_eq!(s.sizes, vec![10, 20]);
    }

    #[test]
    fn defaults_and_bad_names() {
        let s = resolve(RunFile::default(), RunFile::default()).unwrap();
        assert_eq!(s.config, HullConfig::default());
        assert_eq!(s.sizes, DEFAULT_SIZES.to_vec());

        let bad = RunFile {
            dataset: Some("torus".into()),
            ..RunFile::default()
        };
        let err = resolve(bad, RunFile::default()).unwrap_err();
        assert!(err.to_string().contains("torus"));
    }

    #[test]
    fn load_reads_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        fs::write(&path, r#"{"seed": 3, "engines": ["segmented", "quickhull"]}"#).unwrap();
        let file = RunFile::load(&path).unwrap();
        assert_eq!(file.seed, Some(3));
        let s = resolve(file, RunFile::default()).unwrap();
        assert_eq!(s.config.engines, vec![Engine::Segmented, Engine::QuickHull]);

        fs::write(&path, r#"{"sead": 3}"#).unwrap();
        assert!(RunFile::load(&path).is_err());
    }
}
