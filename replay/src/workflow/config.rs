use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use lcdash::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Exported `{all_data, viz_data}` JSON; synthesized when absent.
    pub dataset: Option<PathBuf>,
    pub generator: GeneratorConfig,
    /// Events script; only the initial state is replayed when absent.
    pub events: Option<PathBuf>,
    /// JSON lines destination; stdout when absent.
    pub output: Option<PathBuf>,
    pub session: SessionConfig,
}

impl ReplayConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading replay config {}", path_ref.display()))?;
        let config: ReplayConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing replay config {}", path_ref.display()))?;
        config
            .session
            .validate()
            .with_context(|| format!("validating session in {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(models: usize, steps: usize, seed: u64) -> Self {
        Self {
            generator: GeneratorConfig {
                models,
                heating_steps: steps / 2,
                cooling_steps: steps - steps / 2,
                seed,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
