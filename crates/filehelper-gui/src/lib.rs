/// FileHelper GUI -- egui-based desktop frontend.
///
/// This crate contains all UI code. Business logic lives in `filehelper-core`.
pub mod app;
pub mod state;
pub mod widgets;

pub use app::FileHelperApp;
