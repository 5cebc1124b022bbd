//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// One-line usage printed when the argument count is wrong.
pub const USAGE: &str = "Usage: kmernext <reads.fa> <k>";

/// Counts k-mers in a FASTA file and which base follows each one.
///
/// Writes a tab-delimited table to kmer_output_k<k>.txt in the current directory.
#[derive(Parser, Debug)]
#[command(name = "kmernext")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file ("-" reads stdin)
    pub path: PathBuf,

    /// K-mer length (at least 1)
    #[arg(value_parser = parse_k, allow_negative_numbers = true)]
    pub k: usize,
}

/// Parses a decimal k-mer length.
///
/// Surrounding whitespace and a leading `+` are accepted, as are single `_`
/// separators between digits (`1_000`).
fn parse_k(s: &str) -> Result<usize, String> {
    let invalid = || format!("'{s}' is not a valid number");
    let digits = s.trim();
    let unsigned = digits.strip_prefix('+').unwrap_or(digits);
    if unsigned.starts_with('_') || unsigned.ends_with('_') || unsigned.contains("__") {
        return Err(invalid());
    }
    let k: usize = digits.replace('_', "").parse().map_err(|_| invalid())?;
    if k == 0 {
        return Err("k-mer length must be at least 1".to_string());
    }
    Ok(k)
}
