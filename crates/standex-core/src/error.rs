use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandexError {
    #[error("cannot read input file {path}: {reason}")]
    FileAccess { path: PathBuf, reason: String },

    #[error("PDF format error: {0}")]
    Format(String),

    #[error("parser was given empty input text")]
    EmptyInput,

    #[error("failed to write spreadsheet {path}: {reason}")]
    Export { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
