//! Module errors

use thiserror::Error;

/// Represents the different types of errors that can occur while exporting experiment data.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Column separators are written as a single ASCII byte.
    #[error("invalid column separator {0:?}: expected a single ASCII character")]
    InvalidSeparator(char),

    /// The requested export format is not part of the catalog.
    #[error("unknown export format '{0}'")]
    UnknownFormat(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("exported text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Error parsing a JSON export configuration.
    #[error("invalid export configuration: {0}")]
    Config(#[from] serde_json::Error),
}
