use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PredictorError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub bundle_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            bundle_path: PathBuf::from("models/engagement-v1.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PredictorConfig {
    pub model: ModelConfig,
}

impl PredictorConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)?;
                toml::from_str(&contents)?
            } else {
                PredictorConfig::default()
            }
        } else {
            PredictorConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| PredictorError::Config(format!("failed to serialize config: {}", err)))?;
        std::fs::write(path, payload)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(bundle_path) = env::var("MODEL_BUNDLE_PATH") {
            if !bundle_path.trim().is_empty() {
                self.model.bundle_path = PathBuf::from(bundle_path);
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("PREDICTOR_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/predictor.toml")))
}
