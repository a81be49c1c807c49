use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid message JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Non-finite value in field '{field}'")]
    NonFinite { field: &'static str },
}
