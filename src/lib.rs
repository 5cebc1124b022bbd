//! # kmernext
//!
//! K-mer occurrence counts and next-base transition histograms for DNA
//! sequences in FASTA files.
//!
//! The pipeline has three steps:
//!
//! 1. [`loader`] joins every non-header line of the input into one uppercased
//!    [`Sequence`](loader::Sequence).
//! 2. [`table`] slides a window of length k across it and builds a
//!    [`KmerTable`](table::KmerTable): per k-mer, a total count and a histogram
//!    of the base that came next.
//! 3. [`writer`] emits the table as a sorted, tab-delimited report.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use kmernext::run::count_kmers;
//!
//! let table = count_kmers("reads.fa", 3)?;
//! for (kmer, record) in table.sorted() {
//!     let p = record.transition_probability('A').unwrap_or(0.0);
//!     println!("{} -> A: {p:.3}", String::from_utf8_lossy(kmer));
//! }
//! # Ok::<(), kmernext::error::KmerNextError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: structured logging of each pipeline step
//! - `gzip`: read `.gz` compressed FASTA input

pub mod cli;
pub mod error;
pub mod input;
pub mod kmer;
pub mod loader;
pub mod run;
pub mod table;
pub mod writer;

pub use error::KmerNextError;
pub use run::{count_kmers, run, run_to_path};
