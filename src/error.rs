//! Error taxonomy for the rendering pipeline.
//!
//! The pipeline is a pure, deterministic transformation: there is no retry
//! policy anywhere. Any failure aborts the invocation before partial output
//! is written.

use std::io;

use thiserror::Error;

use crate::types::ScalarKind;

/// Everything that can go wrong between a grid and its printed form.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input does not form a rectangular grid (shape/length mismatch,
    /// ragged rows). Raised at construction, before any formatting work.
    #[error("not a recognized array: {0}")]
    InvalidInput(String),

    /// The scalar kind is not one of integer, real, or complex. Raised
    /// during entry-formatter setup, before any entry is processed.
    #[error("unsupported scalar kind: {0}")]
    UnsupportedKind(ScalarKind),

    /// A scalar's minimal text form does not match the grammar for its
    /// kind. Silently truncating would corrupt the alignment of the whole
    /// grid, so this propagates as a fatal error instead.
    #[error("{kind} entry {text:?} does not match its minimal-text grammar")]
    MalformedEntry { kind: ScalarKind, text: String },

    /// The output stream rejected the write.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::InvalidInput("rows of unequal length".to_string());
        assert_eq!(err.to_string(), "not a recognized array: rows of unequal length");

        let err = RenderError::UnsupportedKind(ScalarKind::Bool);
        assert_eq!(err.to_string(), "unsupported scalar kind: boolean");

        let err = RenderError::MalformedEntry {
            kind: ScalarKind::Real,
            text: "nan".to_string(),
        };
        assert!(err.to_string().contains("\"nan\""));
    }
}
