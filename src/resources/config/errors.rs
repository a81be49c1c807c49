use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ConfigError {
    pub fn invalid(name: &str, value: impl ToString) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
