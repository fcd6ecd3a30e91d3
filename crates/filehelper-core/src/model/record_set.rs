/// The owned, size-sorted collection of records from the latest scan.
///
/// A scan builds a fresh `RecordSet` and the caller swaps it in wholesale;
/// deletions remove individual entries while keeping the rest in order.
use super::file_record::FileRecord;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<FileRecord>,
}

impl RecordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from unsorted records, sorting them by size descending.
    ///
    /// The sort is stable, so equal-sized files keep their discovery order.
    pub fn from_unsorted(mut records: Vec<FileRecord>) -> Self {
        records.sort_by(|a, b| b.size.cmp(&a.size));
        Self { records }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&FileRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[FileRecord] {
        &self.records
    }

    /// Index of the record for `path`, if present.
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.records.iter().position(|r| r.path == path)
    }

    /// Remove the record for `path`, preserving the order of the rest.
    pub fn remove_by_path(&mut self, path: &Path) -> Option<FileRecord> {
        let idx = self.position_of(path)?;
        Some(self.records.remove(idx))
    }

    /// Sum of all record sizes.
    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|r| r.size).sum()
    }

    /// Number of records whose metadata could not be read.
    pub fn unavailable_count(&self) -> usize {
        self.records.iter().filter(|r| !r.available).count()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
