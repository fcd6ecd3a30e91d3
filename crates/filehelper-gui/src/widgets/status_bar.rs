/// Bottom status bar -- scan summary and the latest action result.
use crate::state::{AppPhase, AppState};
use filehelper_core::model::size::{format_count, format_size};
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
            }
            AppPhase::Results => {
                if let Some(root) = &state.scan_root {
                    ui.label(
                        egui::RichText::new(truncate_path(&root.to_string_lossy(), 60))
                            .size(12.0)
                            .color(color_normal),
                    );
                    ui.separator();
                }

                ui.label(
                    egui::RichText::new(format!(
                        "{} files",
                        format_count(state.records.len() as u64)
                    ))
                    .size(12.0)
                    .color(color_normal),
                );

                ui.separator();

                ui.label(
                    egui::RichText::new(format_size(state.records.total_size()))
                        .size(12.0)
                        .color(color_accent),
                );

                let unavailable = state.records.unavailable_count();
                if unavailable > 0 {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} unavailable",
                            format_count(unavailable as u64)
                        ))
                        .size(12.0)
                        .color(color_warning),
                    );
                }

                if let Some(duration) = state.scan_duration {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                            .size(12.0)
                            .color(color_weak),
                    );
                }
            }
        }

        if let Some(message) = &state.status_message {
            ui.separator();
            ui.label(egui::RichText::new(message).size(12.0).color(color_normal));
        }
    });
}

/// Truncate a path string to fit within `max_len` characters,
/// replacing the middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}
