pub mod metadata;
pub mod text;

pub use metadata::{extract_metadata_features, FEATURE_COLUMNS};
pub use text::extract_text_features;

use crate::errors::{PredictorError, Result};

/// Ordered, named numeric features. Insertion order is the schema order;
/// the trained artifact is keyed to it, so it must never drift.
#[derive(Debug, Clone, Default)]
pub struct FeatureVector {
    entries: Vec<(String, f64)>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, name: &str, value: f64) {
        self.entries.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project onto a trained column list, in that list's order. A missing
    /// key is a schema error, never a silent zero-fill.
    pub fn project(&self, columns: &[String]) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(columns.len());
        for column in columns {
            match self.get(column) {
                Some(value) => values.push(value),
                None => {
                    return Err(PredictorError::schema_mismatch(format!(
                        "feature '{}' required by the model is missing",
                        column
                    )))
                }
            }
        }
        Ok(values)
    }
}
