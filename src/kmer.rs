//! Validated k-mer length.

use std::{fmt, num::NonZeroUsize};

use crate::error::KmerLengthError;

/// Smallest k-mer length that produces a table.
pub const MIN_K: usize = 1;

/// A k-mer length known to be at least [`MIN_K`].
///
/// K-mers are kept as byte slices of the loaded sequence rather than packed
/// integers, so there is no upper bound. A `k` longer than the sequence is
/// valid and simply yields an empty table.
///
/// # Example
///
/// ```rust
/// use kmernext::kmer::KmerLength;
///
/// let k = KmerLength::new(3)?;
/// assert_eq!(k.get(), 3);
/// assert!(KmerLength::new(0).is_err());
/// # Ok::<(), kmernext::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(NonZeroUsize);

impl KmerLength {
    /// Validates `k`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self, KmerLengthError> {
        NonZeroUsize::new(k)
            .map(Self)
            .ok_or(KmerLengthError { k, min: MIN_K })
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
