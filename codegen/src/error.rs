use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported protocol: {0}")]
    UnsupportedProtocol(String),
}
