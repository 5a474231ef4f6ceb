//! Shared error types for the services crate.

use thiserror::Error;

use tryunfo_core::model::{CardId, DraftError};

/// Errors emitted by `save_draft`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SaveError {
    #[error(transparent)]
    InvalidDraft(#[from] DraftError),
    #[error("the deck already has a Super Trunfo card")]
    TrumpTaken,
}

/// Errors emitted by `delete_card`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeleteError {
    #[error("card {0} is not in the deck")]
    NotFound(CardId),
}

/// Errors emitted while building the demo deck.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error("demo deck data is malformed: {0}")]
    Data(#[from] serde_json::Error),
    #[error(transparent)]
    Save(#[from] SaveError),
}
