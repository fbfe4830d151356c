use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation failed: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Completion service errors
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion service unavailable: {message} (retries: {retries})")]
    Unavailable { message: String, retries: u32 },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for completion service operations
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
