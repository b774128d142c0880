use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Malformed query result: {0}")]
    MalformedResult(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Path escapes the vault: {0}")]
    OutsideVault(String),

    #[error("A digest run is already in progress for this vault")]
    Locked,
}
