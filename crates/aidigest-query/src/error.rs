use aidigest_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Failed to run query engine `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine reply was not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Engine reply was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
