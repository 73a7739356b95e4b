// File: crates/gapminder-core/src/error.rs
// Summary: Error taxonomy for loading, view building, and rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The CSV resource could not be opened or read.
    #[error("failed to load dataset '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("line {line}: column '{column}' has non-numeric value '{value}'")]
    MalformedRow {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Nothing left to scale over (empty input, or every row was filtered out).
    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, DashboardError::EmptyDataset(_))
    }

    pub fn is_load_failure(&self) -> bool {
        matches!(self, DashboardError::Load { .. })
    }
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
