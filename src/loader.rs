//! FASTA sequence loading.
//!
//! The input is decoded as UTF-8 text. `\n`, `\r\n` and a bare `\r` all end a
//! line. Every line that does not start with `>` is trimmed of surrounding
//! whitespace, uppercased and appended to a single buffer. Record boundaries
//! are not kept: all records are joined into one [`Sequence`].

use std::{fmt::Debug, io::Read, ops::Deref};

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

use crate::{error::KmerNextError, input::Input};

const HEADER_MARKER: char = '>';

/// The concatenated, uppercased sequence of a FASTA input.
///
/// Characters outside the nucleotide alphabet (e.g. `N`) are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence(String);

impl Sequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Sequence {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sequence {
    /// Wraps `s` verbatim, without trimming or case folding.
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Reads the FASTA input and returns its concatenated sequence.
///
/// # Errors
///
/// Returns [`KmerNextError::SequenceRead`] if the input cannot be opened, is
/// not valid UTF-8, or a read fails part way through.
///
/// # Example
///
/// ```rust,no_run
/// use kmernext::loader::read_sequence;
///
/// let seq = read_sequence("reads.fa")?;
/// println!("{} bases", seq.chars().count());
/// # Ok::<(), kmernext::error::KmerNextError>(())
/// ```
pub fn read_sequence<I>(input: I) -> Result<Sequence, KmerNextError>
where
    I: Into<Input> + Debug,
{
    let input = input.into();

    #[cfg(feature = "tracing")]
    let _span = info_span!("read_sequence", input = %input).entered();

    let reader = input.open()?;
    read_sequence_from_reader(reader)
        .map_err(|e| KmerNextError::sequence_read(e, input.to_string()))
}

/// Reads FASTA text from any reader.
///
/// # Errors
///
/// Propagates any I/O error from `reader`, and fails with
/// [`std::io::ErrorKind::InvalidData`] if the text is not valid UTF-8.
pub fn read_sequence_from_reader<R: Read>(mut reader: R) -> std::io::Result<Sequence> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut seq = String::with_capacity(text.len());
    // A `\r\n` pair yields an empty line between the two, which adds nothing.
    for line in text.split(['\r', '\n']) {
        if !line.starts_with(HEADER_MARKER) {
            seq.push_str(&line.trim_matches(is_strippable).to_uppercase());
        }
    }

    #[cfg(feature = "tracing")]
    debug!(bytes = text.len(), bases = seq.chars().count(), "Read sequence");

    Ok(Sequence(seq))
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
