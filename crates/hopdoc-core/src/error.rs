use thiserror::Error;

/// Failure to decode a collection document. Nothing is rendered when this occurs.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Failure of a single live fetch.
///
/// The `Display` form is embedded verbatim in the generated document, so the
/// render carries on with the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to create request: {0}")]
    Construct(String),

    #[error("Failed to execute request: {0}")]
    Execute(String),

    #[error("Failed to read response: {0}")]
    Read(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml_ng::Error,
    },
}
