//! Tree-ensemble regressor loaded from an exported artifact.
//!
//! Each tree is a flat node array: internal nodes hold a feature index,
//! threshold and child indices; leaves carry a `value`. Prediction walks
//! from node 0 and the ensemble output is the mean over trees.

use serde::{Deserialize, Serialize};

use crate::errors::{PredictorError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub feature: usize,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub left: usize,
    #[serde(default)]
    pub right: usize,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        let mut index = 0usize;
        // A well-formed tree terminates in at most `nodes.len()` hops.
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(index).ok_or_else(|| {
                PredictorError::model_load(format!("tree node index {} out of bounds", index))
            })?;
            if let Some(value) = node.value {
                return Ok(value);
            }
            let feature = *features.get(node.feature).ok_or_else(|| {
                PredictorError::schema_mismatch(format!(
                    "tree references feature index {} beyond vector length {}",
                    node.feature,
                    features.len()
                ))
            })?;
            index = if feature <= node.threshold {
                node.left
            } else {
                node.right
            };
        }
        Err(PredictorError::model_load(
            "tree walk did not reach a leaf".to_string(),
        ))
    }

    fn validate(&self, feature_count: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(PredictorError::model_load(
                "tree has no nodes".to_string(),
            ));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            if node.value.is_some() {
                continue;
            }
            if node.feature >= feature_count {
                return Err(PredictorError::model_load(format!(
                    "node {} splits on feature {} but the schema has {} features",
                    index, node.feature, feature_count
                )));
            }
            if node.left >= self.nodes.len() || node.right >= self.nodes.len() {
                return Err(PredictorError::model_load(format!(
                    "node {} has a child index out of bounds",
                    index
                )));
            }
            if !node.threshold.is_finite() {
                return Err(PredictorError::model_load(format!(
                    "node {} has a non-finite threshold",
                    index
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestRegressor {
    pub trees: Vec<DecisionTree>,
}

impl ForestRegressor {
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if self.trees.is_empty() {
            return Err(PredictorError::model_load(
                "forest has no trees".to_string(),
            ));
        }
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    pub fn validate(&self, feature_count: usize) -> Result<()> {
        if self.trees.is_empty() {
            return Err(PredictorError::model_load(
                "forest has no trees".to_string(),
            ));
        }
        for tree in &self.trees {
            tree.validate(feature_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: f64) -> TreeNode {
        TreeNode {
            feature: 0,
            threshold: 0.0,
            left: 0,
            right: 0,
            value: Some(value),
        }
    }

    fn split(feature: usize, threshold: f64, left: usize, right: usize) -> TreeNode {
        TreeNode {
            feature,
            threshold,
            left,
            right,
            value: None,
        }
    }

    #[test]
    fn single_leaf_tree_is_constant() {
        let forest = ForestRegressor {
            trees: vec![DecisionTree {
                nodes: vec![leaf(42.0)],
            }],
        };
        assert!((forest.predict(&[0.0]).unwrap() - 42.0).abs() < 1e-9);
    }

    #[test]
    fn split_routes_on_threshold() {
        let tree = DecisionTree {
            nodes: vec![split(0, 0.5, 1, 2), leaf(10.0), leaf(20.0)],
        };
        let forest = ForestRegressor { trees: vec![tree] };
        assert!((forest.predict(&[0.0]).unwrap() - 10.0).abs() < 1e-9);
        assert!((forest.predict(&[1.0]).unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn ensemble_averages_trees() {
        let forest = ForestRegressor {
            trees: vec![
                DecisionTree {
                    nodes: vec![leaf(100.0)],
                },
                DecisionTree {
                    nodes: vec![leaf(300.0)],
                },
            ],
        };
        assert!((forest.predict(&[]).unwrap() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn validation_rejects_out_of_schema_split() {
        let forest = ForestRegressor {
            trees: vec![DecisionTree {
                nodes: vec![split(5, 0.0, 1, 1), leaf(1.0)],
            }],
        };
        assert!(forest.validate(3).is_err());
    }
}
