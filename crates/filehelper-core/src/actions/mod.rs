/// Actions that change the filesystem.

pub mod delete;

pub use delete::{delete_record, delete_records, BulkDeleteReport};
