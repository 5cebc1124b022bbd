//! Tab-delimited report output.
//!
//! The report has a fixed header followed by one row per k-mer, ordered
//! by k-mer code point. Only the four canonical bases get a column; counts for
//! any other follower (e.g. `N`) are reflected in `Total` alone.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

use crate::{error::KmerNextError, kmer::KmerLength, table::KmerTable};

/// First line of every report.
pub const HEADER: &str = "Kmer\tTotal\tNext_A\tNext_C\tNext_G\tNext_T";

/// Follower bases given a column, in column order.
pub const REPORT_BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Report file name for `k`, relative to the working directory.
///
/// ```rust
/// use kmernext::{kmer::KmerLength, writer::output_filename};
///
/// let k = KmerLength::new(5)?;
/// assert_eq!(output_filename(k).to_str(), Some("kmer_output_k5.txt"));
/// # Ok::<(), kmernext::error::KmerLengthError>(())
/// ```
pub fn output_filename(k: KmerLength) -> PathBuf {
    PathBuf::from(format!("kmer_output_k{k}.txt"))
}

/// Writes the report for `table` to `out`.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_table<W: Write>(table: &KmerTable, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for (kmer, record) in table.sorted() {
        out.write_all(kmer)?;
        write!(out, "\t{}", record.total())?;
        for base in REPORT_BASES {
            write!(out, "\t{}", record.next_count(base))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Creates (or truncates) the file at `path` and writes the report to it.
///
/// The write is not atomic: a failure part way leaves a truncated file.
///
/// # Errors
///
/// Returns [`KmerNextError::OutputWrite`] if the file cannot be created or
/// written.
pub fn write_table_to_path<P: AsRef<Path>>(
    table: &KmerTable,
    path: P,
) -> Result<(), KmerNextError> {
    let path = path.as_ref();

    #[cfg(feature = "tracing")]
    let _span = info_span!("write_table", path = ?path, rows = table.len()).entered();

    File::create(path)
        .map(BufWriter::new)
        .and_then(|buf| write_table(table, buf))
        .map_err(|e| KmerNextError::output_write(e, path))?;

    #[cfg(feature = "tracing")]
    debug!(rows = table.len(), "Wrote report");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::KmerRecord;

    fn render(table: &KmerTable) -> String {
        let mut buf = Vec::new();
        write_table(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rows_follow_header_in_order() {
        let table: KmerTable = [
            ("AAC", KmerRecord::new(2, [('G', 2)])),
            ("AAA", KmerRecord::new(3, [('A', 1), ('C', 2)])),
        ]
        .into_iter()
        .collect();

        let report = render(&table);
        assert!(report.contains("AAA\t3\t1\t2\t0\t0\n"));
        insta::assert_snapshot!(report.replace('\t', " "), @r"
        Kmer Total Next_A Next_C Next_G Next_T
        AAA 3 1 2 0 0
        AAC 2 0 0 2 0
        ");
    }

    #[test]
    fn empty_table_is_header_only() {
        assert_eq!(render(&KmerTable::new()), format!("{HEADER}\n"));
    }

    #[test]
    fn non_canonical_followers_have_no_column() {
        let table: KmerTable = [("AC", KmerRecord::new(3, [('N', 2), ('T', 1)]))]
            .into_iter()
            .collect();
        assert_eq!(render(&table), format!("{HEADER}\nAC\t3\t0\t0\t0\t1\n"));
    }

    #[test]
    fn non_ascii_kmers_are_written_as_utf8() {
        let seq = crate::loader::read_sequence_from_reader(&b">s\nac\xc3\xa9\n"[..]).unwrap();
        let table = KmerTable::build(&seq, KmerLength::new(1).unwrap());
        assert_eq!(
            render(&table),
            format!("{HEADER}\nA\t1\t0\t1\t0\t0\nC\t1\t0\t0\t0\t0\nÉ\t1\t0\t0\t0\t0\n")
        );
    }

    #[test]
    fn output_filename_pattern() {
        let k = KmerLength::new(12).unwrap();
        assert_eq!(output_filename(k), PathBuf::from("kmer_output_k12.txt"));
    }

    #[test]
    fn write_to_unwritable_path_fails() {
        let err = write_table_to_path(&KmerTable::new(), "/nonexistent/dir/out.txt").err();
        assert!(matches!(err, Some(KmerNextError::OutputWrite { .. })));
    }
}
