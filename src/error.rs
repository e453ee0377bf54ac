use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChansyncError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Index API error ({status}): {message}")]
    IndexApi { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{tool} failed: {message}")]
    Tool { tool: String, message: String },
}

pub type Result<T> = std::result::Result<T, ChansyncError>;
