/// UI widgets for FileHelper.

pub mod dialogs;
pub mod file_table;
pub mod status_bar;
pub mod toolbar;
