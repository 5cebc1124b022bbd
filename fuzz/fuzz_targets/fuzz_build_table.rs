//! Fuzz target for `KmerTable::build`.
//!
//! Feeds arbitrary bytes through the loader and tabulator and checks the
//! counting invariants on whatever comes out.

#![no_main]

use kmernext::kmer::KmerLength;
use kmernext::loader::read_sequence_from_reader;
use kmernext::table::KmerTable;
use kmernext::writer::write_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&k, text)) = data.split_first() else {
        return;
    };
    let Ok(k) = KmerLength::new(usize::from(k % 16)) else {
        return;
    };

    // Only invalid UTF-8 is rejected
    let Ok(seq) = read_sequence_from_reader(text) else {
        assert!(std::str::from_utf8(text).is_err());
        return;
    };
    let table = KmerTable::build(&seq, k);

    let windows = (seq.chars().count() + 1).saturating_sub(k.get()) as u64;
    let total: u64 = table.iter().map(|(_, r)| r.total()).sum();
    assert_eq!(total, windows);

    for (kmer, record) in table.iter() {
        let kmer = std::str::from_utf8(kmer).unwrap();
        assert_eq!(kmer.chars().count(), k.get());
        assert!(record.followed() <= record.total());
    }

    let mut report = Vec::new();
    write_table(&table, &mut report).unwrap();
    assert_eq!(report.iter().filter(|&&b| b == b'\n').count(), table.len() + 1);
});
