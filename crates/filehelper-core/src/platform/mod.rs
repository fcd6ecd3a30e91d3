/// Platform-specific metadata lookups.

pub mod created;

pub use created::creation_time;
