//! Error types for kmernext.
//!
//! Every fallible operation in the library returns [`KmerNextError`], so the
//! binary can report a single kind of failure with the path that caused it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmernext operations.
#[derive(Debug, Error)]
pub enum KmerNextError {
    /// K-mer length is below the minimum of 1.
    #[error("invalid k-mer length {k}: must be at least {min}")]
    InvalidKmerLength { k: usize, min: usize },

    /// Failed to open or read the sequence input.
    #[error("failed to read sequence input '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to create or write the report file.
    #[error("failed to write output '{path}': {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl KmerNextError {
    pub(crate) fn sequence_read(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::SequenceRead {
            source,
            path: path.into(),
        }
    }

    pub(crate) fn output_write(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::OutputWrite {
            source,
            path: path.into(),
        }
    }
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be at least {min}")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
    /// Minimum valid k-mer length.
    pub min: usize,
}

impl From<KmerLengthError> for KmerNextError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength {
            k: err.k,
            min: err.min,
        }
    }
}
