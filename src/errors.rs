use std::io;

use thiserror::Error;

/// Error type for dataset loading and structural validation failures.
///
/// All variants are fatal initialization faults: once a store is built,
/// malformed individual values are handled by exclusion, never by erroring.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("dataset is missing the '{0}' records namespace")]
    MissingNamespace(&'static str),
    #[error("dataset structure is invalid: {details}")]
    InvalidStructure { details: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
