//! Error types for seg-sieve-report

use thiserror::Error;

/// Report error type
#[derive(Error, Debug)]
pub enum ReportError {
    /// Benchmark rows could not be parsed as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the CSV header
    #[error("missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    /// Invalid chart configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be decoded
    #[error("configuration file error: {0}")]
    ConfigFile(#[from] serde_json::Error),

    /// Drawing or encoding the chart failed
    #[error("plot error: {0}")]
    Plot(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReportError>;
