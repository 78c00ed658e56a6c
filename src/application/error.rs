// Errors surfaced by the explorer use cases
use crate::domain::selection::ParseViewTypeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// View type outside `total` / `by_speakers`
    #[error(transparent)]
    InvalidViewType(#[from] ParseViewTypeError),

    /// Dataset could not be loaded or failed validation
    #[error("dataset error: {0}")]
    Dataset(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
