//! Load, tabulate, write.
//!
//! These functions tie the [`loader`](crate::loader), [`table`](crate::table)
//! and [`writer`](crate::writer) together. The binary calls [`run`]; library
//! users who want the table in memory call [`count_kmers`].

use std::{fmt::Debug, path::PathBuf};

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

use crate::{
    error::KmerNextError,
    input::Input,
    kmer::KmerLength,
    loader::read_sequence,
    table::KmerTable,
    writer::{output_filename, write_table_to_path},
};

/// Loads the FASTA input and tabulates its k-mers.
///
/// # Errors
///
/// Returns [`KmerNextError::InvalidKmerLength`] if `k` is zero, or
/// [`KmerNextError::SequenceRead`] if the input cannot be read.
///
/// # Example
///
/// ```rust,no_run
/// use kmernext::run::count_kmers;
///
/// let table = count_kmers("reads.fa", 3)?;
/// if let Some(record) = table.get("ACG") {
///     println!("ACG seen {} times", record.total());
/// }
/// # Ok::<(), kmernext::error::KmerNextError>(())
/// ```
pub fn count_kmers<I>(input: I, k: usize) -> Result<KmerTable, KmerNextError>
where
    I: Into<Input> + Debug,
{
    let k = KmerLength::new(k)?;

    #[cfg(feature = "tracing")]
    info!(k = k.get(), input = ?input, "Starting k-mer tabulation");

    let seq = read_sequence(input)?;

    #[cfg(feature = "tracing")]
    let _span = info_span!("tabulate", k = k.get(), bases = seq.len()).entered();

    let table = KmerTable::build(&seq, k);

    #[cfg(feature = "tracing")]
    info!(distinct_kmers = table.len(), "K-mer tabulation complete");

    Ok(table)
}

/// Runs the whole pipeline and writes `kmer_output_k<k>.txt` in the
/// current working directory.
///
/// Returns the path that was written.
///
/// # Errors
///
/// Returns any error from [`count_kmers`], or
/// [`KmerNextError::OutputWrite`] if the report cannot be written.
pub fn run<I>(input: I, k: usize) -> Result<PathBuf, KmerNextError>
where
    I: Into<Input> + Debug,
{
    let out = output_filename(KmerLength::new(k)?);
    run_to_path(input, k, &out)?;
    Ok(out)
}

/// Runs the whole pipeline, writing the report to `out`.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_to_path<I, P>(input: I, k: usize, out: P) -> Result<(), KmerNextError>
where
    I: Into<Input> + Debug,
    P: AsRef<std::path::Path>,
{
    let table = count_kmers(input, k)?;
    write_table_to_path(&table, out)
}
