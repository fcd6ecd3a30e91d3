/// Analysis modules -- post-scan selections over the record set.

pub mod special_files;

pub use special_files::find_special_files;
