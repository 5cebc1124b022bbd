//! K-mer tabulation.
//!
//! A fixed-width window slides across the sequence. Every window bumps the
//! total count of its k-mer; every window except the last also records the
//! character that immediately follows it. Windows are measured in characters,
//! not bytes, and the follower histogram accepts any character, so ambiguous
//! bases such as `N` are counted like any other.
//!
//! # Example
//!
//! ```rust
//! use kmernext::{kmer::KmerLength, loader::Sequence, table::KmerTable};
//!
//! let seq = Sequence::from("ACGTAC");
//! let table = KmerTable::build(&seq, KmerLength::new(3)?);
//!
//! let acg = table.get("ACG").unwrap();
//! assert_eq!(acg.total(), 1);
//! assert_eq!(acg.next_count('T'), 1);
//!
//! // The trailing k-mer is present even though nothing follows it.
//! assert_eq!(table.get("TAC").map(|r| r.followed()), Some(0));
//! # Ok::<(), kmernext::error::KmerLengthError>(())
//! ```

use bytes::Bytes;
use rustc_hash::FxHashMap;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use crate::{kmer::KmerLength, loader::Sequence};

/// Occurrence count of one k-mer and the histogram of what follows it.
///
/// `total()` is never less than `followed()`; the difference is the number
/// of occurrences that end the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerRecord {
    total: u64,
    followers: FxHashMap<char, u64>,
}

impl KmerRecord {
    /// Creates a record with explicit counts.
    ///
    /// `total` is raised to the follower sum if it is smaller.
    pub fn new<I>(total: u64, followers: I) -> Self
    where
        I: IntoIterator<Item = (char, u64)>,
    {
        let mut record = Self::default();
        for (base, count) in followers {
            *record.followers.entry(base).or_insert(0) += count;
        }
        record.total = total.max(record.followed());
        record
    }

    fn observe(&mut self, next: Option<char>) {
        self.total += 1;
        if let Some(base) = next {
            *self.followers.entry(base).or_insert(0) += 1;
        }
    }

    /// Number of windows holding this k-mer.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// How many times `base` immediately followed this k-mer.
    pub fn next_count(&self, base: char) -> u64 {
        self.followers.get(&base).copied().unwrap_or(0)
    }

    /// Sum of the follower histogram.
    pub fn followed(&self) -> u64 {
        self.followers.values().sum()
    }

    /// Iterates over `(next base, count)` pairs in no particular order.
    pub fn followers(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.followers.iter().map(|(&base, &count)| (base, count))
    }

    /// Fraction of followed occurrences in which `base` came next.
    ///
    /// `None` when the k-mer was never followed by anything.
    #[allow(clippy::cast_precision_loss)]
    pub fn transition_probability(&self, base: char) -> Option<f64> {
        match self.followed() {
            0 => None,
            n => Some(self.next_count(base) as f64 / n as f64),
        }
    }
}

/// Map from k-mer to its [`KmerRecord`].
///
/// Keys are slices of one shared copy of the sequence, always cut on
/// character boundaries, so each key is valid UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerTable {
    records: FxHashMap<Bytes, KmerRecord>,
}

impl KmerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabulates every k-mer of `seq`.
    ///
    /// A sequence shorter than `k` characters produces an empty table. A
    /// sequence of exactly `k` characters produces one k-mer with no
    /// followers.
    pub fn build(seq: &Sequence, k: KmerLength) -> Self {
        let k = k.get();
        let text = seq.as_str();
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut table = Self::new();

        let Some(last) = chars.len().checked_sub(k) else {
            #[cfg(feature = "tracing")]
            warn!(k, len = chars.len(), "Sequence is shorter than k; table is empty");
            return table;
        };

        let bytes = Bytes::copy_from_slice(text.as_bytes());
        for i in 0..last {
            let (start, _) = chars[i];
            let (end, next) = chars[i + k];
            table.observe(bytes.slice(start..end), Some(next));
        }
        table.observe(bytes.slice(chars[last].0..), None);

        #[cfg(feature = "tracing")]
        debug!(k, distinct = table.len(), "Tabulated k-mers");

        table
    }

    fn observe(&mut self, kmer: Bytes, next: Option<char>) {
        self.records.entry(kmer).or_default().observe(next);
    }

    /// Inserts or replaces the record for `kmer`.
    pub fn insert(&mut self, kmer: &str, record: KmerRecord) -> Option<KmerRecord> {
        self.records.insert(Bytes::copy_from_slice(kmer.as_bytes()), record)
    }

    pub fn get(&self, kmer: &str) -> Option<&KmerRecord> {
        self.records.get(kmer.as_bytes())
    }

    /// Number of distinct k-mers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the entries in no particular order.
    ///
    /// Keys are the UTF-8 bytes of each k-mer.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &KmerRecord)> + '_ {
        self.records.iter().map(|(kmer, record)| (kmer.as_ref(), record))
    }

    /// Returns the entries ordered bytewise by k-mer, which for UTF-8 is
    /// code point order.
    pub fn sorted(&self) -> Vec<(&[u8], &KmerRecord)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<'a> FromIterator<(&'a str, KmerRecord)> for KmerTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, KmerRecord)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (kmer, record) in iter {
            table.insert(kmer, record);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(seq: &str, k: usize) -> KmerTable {
        KmerTable::build(&Sequence::from(seq), KmerLength::new(k).unwrap())
    }

    fn followers(record: &KmerRecord) -> Vec<(char, u64)> {
        let mut v: Vec<_> = record.followers().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn basic_three_mers() {
        let t = table("ACGTAC", 3);
        assert_eq!(t.len(), 4);

        let acg = t.get("ACG").unwrap();
        assert_eq!(acg.total(), 1);
        assert_eq!(followers(acg), vec![('T', 1)]);

        assert_eq!(followers(t.get("CGT").unwrap()), vec![('A', 1)]);
        assert_eq!(followers(t.get("GTA").unwrap()), vec![('C', 1)]);

        let tac = t.get("TAC").unwrap();
        assert_eq!(tac.total(), 1);
        assert_eq!(tac.followed(), 0);
    }

    #[test]
    fn single_base_k1() {
        let t = table("A", 1);
        let expected: KmerTable = [("A", KmerRecord::new(1, []))].into_iter().collect();
        assert_eq!(t, expected);
    }

    #[test]
    fn sequence_equal_to_k_is_counted_once() {
        let t = table("ACGT", 4);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("ACGT"), Some(&KmerRecord::new(1, [])));
    }

    #[test]
    fn sequence_shorter_than_k_is_empty() {
        assert!(table("ACG", 4).is_empty());
        assert!(table("", 1).is_empty());
    }

    #[test]
    fn trailing_window_counted_once() {
        // windows: AA AA AA, the last one has no follower
        let t = table("AAAA", 2);
        let aa = t.get("AA").unwrap();
        assert_eq!(aa.total(), 3);
        assert_eq!(followers(aa), vec![('A', 2)]);
    }

    #[test]
    fn repeated_kmer_accumulates_followers() {
        let t = table("ACGACTACG", 2);
        let ac = t.get("AC").unwrap();
        assert_eq!(ac.total(), 3);
        assert_eq!(followers(ac), vec![('G', 2), ('T', 1)]);
        assert_eq!(t.get("CG").unwrap().total(), 2);
    }

    #[test]
    fn any_follower_character_is_tracked() {
        let t = table("ACNA", 2);
        assert_eq!(t.get("AC").unwrap().next_count('N'), 1);
        assert_eq!(t.get("CN").unwrap().next_count('A'), 1);
        assert_eq!(t.get("NA").unwrap().total(), 1);
    }

    #[test]
    fn new_raises_total_to_follower_sum() {
        let record = KmerRecord::new(1, [('A', 2), ('C', 1)]);
        assert_eq!(record.total(), 3);
        assert_eq!(record.followed(), 3);
    }

    #[test]
    fn transition_probability() {
        let record = KmerRecord::new(3, [('A', 1), ('C', 2)]);
        assert_eq!(record.transition_probability('C'), Some(2.0 / 3.0));
        assert_eq!(record.transition_probability('G'), Some(0.0));
        assert_eq!(KmerRecord::new(1, []).transition_probability('A'), None);
    }

    #[test]
    fn sorted_is_bytewise() {
        let t = table("TTGACA", 2);
        let keys: Vec<&[u8]> = t.sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![&b"AC"[..], b"CA", b"GA", b"TG", b"TT"]);
    }

    #[test]
    fn windows_are_characters_not_bytes() {
        let t = table("ACÉA", 1);
        assert_eq!(t.len(), 3);
        assert_eq!(t.get("C").unwrap().next_count('É'), 1);
        assert_eq!(t.get("É").unwrap().next_count('A'), 1);
        for (kmer, _) in t.iter() {
            assert!(std::str::from_utf8(kmer).is_ok());
        }

        let t = table("ÉÉÉ", 2);
        assert_eq!(t.get("ÉÉ").map(KmerRecord::total), Some(2));
    }

    #[test]
    fn sorted_is_code_point_order() {
        let t = table("ZÉA", 1);
        let keys: Vec<&[u8]> = t.sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A".as_bytes(), "Z".as_bytes(), "É".as_bytes()]);
    }

    #[test]
    fn insert_replaces() {
        let mut t = KmerTable::new();
        assert!(t.insert("AAA", KmerRecord::new(1, [])).is_none());
        let old = t.insert("AAA", KmerRecord::new(2, [('C', 2)]));
        assert_eq!(old.map(|r| r.total()), Some(1));
        assert_eq!(t.get("AAA").unwrap().next_count('C'), 2);
    }
}
