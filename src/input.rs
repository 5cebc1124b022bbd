//! Where the FASTA text comes from.
//!
//! An [`Input`] is either a file path or standard input (`-`). Opening it
//! yields a buffered line source for the [`loader`](crate::loader); with the
//! `gzip` feature, `.gz` files are decompressed on the fly.
//!
//! # Example
//!
//! ```rust
//! use kmernext::input::Input;
//! use std::path::Path;
//!
//! let input = Input::from_path(Path::new("reads.fa"));
//! assert!(matches!(input, Input::File(_)));
//!
//! let input = Input::from_path(Path::new("-"));
//! assert!(matches!(input, Input::Stdin));
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::error::KmerNextError;

/// Input source for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Read from a file at the specified path.
    File(PathBuf),
    /// Read from standard input.
    Stdin,
}

impl Input {
    /// Creates an `Input` from a path, treating `-` as stdin.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Returns the file path if this is a file input.
    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }

    /// Opens the source for line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns [`KmerNextError::SequenceRead`] if the file does not exist or
    /// cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, KmerNextError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file =
                    File::open(path).map_err(|e| KmerNextError::sequence_read(e, path))?;
                Ok(wrap_file(path, file))
            }
        }
    }
}

impl From<&Path> for Input {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Self::from_path(&path)
    }
}

impl From<&PathBuf> for Input {
    fn from(path: &PathBuf) -> Self {
        Self::from_path(path)
    }
}

impl From<&str> for Input {
    fn from(path: &str) -> Self {
        Self::from_path(Path::new(path))
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

#[cfg(feature = "gzip")]
fn wrap_file(path: &Path, file: File) -> Box<dyn BufRead> {
    if is_gzip_path(path) {
        Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

#[cfg(not(feature = "gzip"))]
fn wrap_file(_path: &Path, file: File) -> Box<dyn BufRead> {
    Box::new(BufReader::new(file))
}
