//! Versioned model artifact and the immutable runtime context around it.
//!
//! The bundle carries the regressor, the fitted scaler and the exact
//! feature-column list they were trained against. `ModelContext` checks the
//! column list against the extractor's schema at construction, so a
//! mismatched deploy fails at load time instead of corrupting predictions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{PredictorError, Result};
use crate::features::{FeatureVector, FEATURE_COLUMNS};
use crate::model::{ForestRegressor, StandardScaler};

pub const BUNDLE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub version: u32,
    pub feature_columns: Vec<String>,
    pub scaler: StandardScaler,
    pub forest: ForestRegressor,
}

impl ModelBundle {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            PredictorError::model_load(format!(
                "failed to read model bundle {}: {}",
                path.display(),
                err
            ))
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            PredictorError::model_load(format!(
                "failed to parse model bundle {}: {}",
                path.display(),
                err
            ))
        })
    }
}

/// Loaded-once, read-only model state. Safe to share across concurrent
/// requests because nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct ModelContext {
    bundle: ModelBundle,
}

impl ModelContext {
    pub fn new(bundle: ModelBundle) -> Result<Self> {
        if bundle.version != BUNDLE_VERSION {
            return Err(PredictorError::model_load(format!(
                "unsupported bundle version {} (expected {})",
                bundle.version, BUNDLE_VERSION
            )));
        }

        if bundle.feature_columns.len() != FEATURE_COLUMNS.len()
            || bundle
                .feature_columns
                .iter()
                .zip(FEATURE_COLUMNS.iter())
                .any(|(got, expected)| got != expected)
        {
            return Err(PredictorError::schema_mismatch(format!(
                "bundle feature columns {:?} do not match the extractor schema {:?}",
                bundle.feature_columns, FEATURE_COLUMNS
            )));
        }

        bundle.scaler.validate()?;
        if bundle.scaler.mean.len() != bundle.feature_columns.len() {
            return Err(PredictorError::model_load(format!(
                "scaler covers {} features but the schema has {}",
                bundle.scaler.mean.len(),
                bundle.feature_columns.len()
            )));
        }
        bundle.forest.validate(bundle.feature_columns.len())?;

        Ok(Self { bundle })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bundle = ModelBundle::load(path)?;
        let context = Self::new(bundle)?;
        info!(
            path = %path.display(),
            trees = context.bundle.forest.trees.len(),
            "loaded model bundle"
        );
        Ok(context)
    }

    pub fn feature_columns(&self) -> &[String] {
        &self.bundle.feature_columns
    }

    /// Reorder to the trained schema, standardize, run the regressor.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let ordered = features.project(&self.bundle.feature_columns)?;
        let scaled = self.bundle.scaler.transform(&ordered)?;
        self.bundle.forest.predict(&scaled)
    }
}
