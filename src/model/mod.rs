pub mod bundle;
pub mod forest;
pub mod scaler;

pub use bundle::{ModelBundle, ModelContext};
pub use forest::{DecisionTree, ForestRegressor, TreeNode};
pub use scaler::StandardScaler;
