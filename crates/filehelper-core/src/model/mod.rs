/// Data model for FileHelper.
///
/// A scan produces a flat, size-sorted `RecordSet` of `FileRecord`s.
pub mod file_record;
pub mod record_set;
pub mod size;

pub use file_record::FileRecord;
pub use record_set::RecordSet;
