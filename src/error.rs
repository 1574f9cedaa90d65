use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarsExportError {
    #[error("Invalid repository identifier: {0}")]
    InvalidRepository(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("GitHub API request failed with status {0}")]
    ApiError(u16),

    #[error("Unsupported output format: {0} (only .csv is supported)")]
    UnsupportedOutputFormat(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StarsExportError>;
