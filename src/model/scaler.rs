use serde::{Deserialize, Serialize};

use crate::errors::{PredictorError, Result};

/// Per-feature standardization with statistics frozen at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl StandardScaler {
    /// (x - mean) / std per feature. A zero or negative stored deviation
    /// falls back to a scale of 1.0, matching the fitting convention for
    /// constant features.
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.len() != self.mean.len() {
            return Err(PredictorError::schema_mismatch(format!(
                "scaler expects {} features, got {}",
                self.mean.len(),
                values.len()
            )));
        }
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(value, (mean, std))| {
                let scale = if *std > 0.0 { *std } else { 1.0 };
                (value - mean) / scale
            })
            .collect())
    }

    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != self.std.len() {
            return Err(PredictorError::model_load(format!(
                "scaler mean/std length mismatch: {} vs {}",
                self.mean.len(),
                self.std.len()
            )));
        }
        if self.mean.iter().chain(self.std.iter()).any(|v| !v.is_finite()) {
            return Err(PredictorError::model_load(
                "scaler statistics contain non-finite values".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizes_against_frozen_stats() {
        let scaler = StandardScaler {
            mean: vec![10.0, 0.0],
            std: vec![2.0, 1.0],
        };
        let scaled = scaler.transform(&[14.0, -3.0]).unwrap();
        assert!((scaled[0] - 2.0).abs() < 1e-9);
        assert!((scaled[1] + 3.0).abs() < 1e-9);
    }

    #[test]
    fn zero_deviation_uses_unit_scale() {
        let scaler = StandardScaler {
            mean: vec![5.0],
            std: vec![0.0],
        };
        let scaled = scaler.transform(&[7.0]).unwrap();
        assert!((scaled[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn length_mismatch_is_schema_error() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            std: vec![1.0, 1.0],
        };
        assert!(scaler.transform(&[1.0]).is_err());
    }
}
