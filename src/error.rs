use thiserror::Error;

/// Main error type for the autocomplete engine
#[derive(Error, Debug)]
pub enum AutocompleteError {
    /// HTTP transport errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Dataset server answered with a non-success status
    #[error("Failed to fetch dataset: {status} {reason}")]
    DatasetFetch { status: u16, reason: String },

    /// Local file errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset parsed but no row carried a name
    #[error("Dataset parsed but contains 0 valid rows.")]
    EmptyDataset,

    /// Catalog queried before a successful load
    #[error("Dataset not loaded")]
    NotLoaded,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AutocompleteError>;
