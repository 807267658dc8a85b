//! Error type shared by the rewrite core.
//!
//! None of these ever escape a [`Rewriter`](crate::resolver::Rewriter) call;
//! they are handed to an [`ErrorSink`](crate::diagnostics::ErrorSink) and the
//! operation falls back to its empty/false answer.

use std::path::PathBuf;

/// Coarse classification used by sinks and callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed JSON in the rule document or in a single rule.
    Decode,
    /// The rule document could not be read or written.
    StorageUnavailable,
    /// The caller handed in something unusable (e.g. an empty slug).
    InvalidInput,
}

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("rule document {} is not valid JSON", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("rule for slug '{slug}' is malformed: {reason}")]
    Rule { slug: String, reason: String },

    #[error("rule storage unavailable at {}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode rule document")]
    Encode(#[source] serde_json::Error),

    #[error("slug {raw:?} is empty after normalization")]
    InvalidSlug { raw: String },
}

impl RewriteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RewriteError::Document { .. } | RewriteError::Rule { .. } => ErrorKind::Decode,
            RewriteError::Storage { .. } => ErrorKind::StorageUnavailable,
            RewriteError::Encode(_) => ErrorKind::Decode,
            RewriteError::InvalidSlug { .. } => ErrorKind::InvalidInput,
        }
    }
}
