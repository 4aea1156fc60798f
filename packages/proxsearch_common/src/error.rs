use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Failures of the storage backend supplying raw term postings.
    /// These are passed through untouched, evaluation is never retried.
    #[error("failed to access postings storage: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed postings in field '{field}' at doc {doc_id}: {reason}")]
    MalformedPostings {
        field: String,
        doc_id: u32,
        reason: &'static str,
    },

    #[error("operand is tagged with field '{found}' but the operator evaluates field '{expected}'")]
    FieldMismatch { expected: String, found: String },

    #[error("invalid term or field name '{0}'")]
    InvalidTerm(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
