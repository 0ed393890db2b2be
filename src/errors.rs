//! Error type of the public API.
//!
//! A missing required field or an ambiguous date is not an error: those
//! outcomes end the turn with a single clarification question instead (see
//! the validator). `ClerkError` covers the failures the core cannot recover
//! from within a turn: the ledger gateway, the export path, and lexicon
//! loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClerkError {
    #[error("ledger store failed: {details}")]
    StoreFailed { details: String },

    #[error("ledger query failed: {details}")]
    QueryFailed { details: String },

    #[error("CSV export is unavailable")]
    ExportUnavailable,

    #[error("invalid amount: '{value}'")]
    InvalidAmount { value: String },

    #[error("invalid lexicon (invalid RON format): {0}")]
    InvalidLexicon(#[from] ron::error::SpannedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ClerkError>;
