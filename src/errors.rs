use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("model load error: {0}")]
    ModelLoad(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PredictorError {
    pub fn validation(message: impl Into<String>) -> Self {
        PredictorError::Validation(message.into())
    }

    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        PredictorError::SchemaMismatch(message.into())
    }

    pub fn model_load(message: impl Into<String>) -> Self {
        PredictorError::ModelLoad(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;
