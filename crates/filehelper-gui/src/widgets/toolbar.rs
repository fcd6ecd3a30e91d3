/// Top action bar -- folder path, scan, delete, export, and theme toggle.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🗂 FileHelper")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Folder path. Enter in the field starts a scan.
        let path_edit = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .hint_text("Folder to scan")
                .desired_width(360.0),
        );
        let enter_pressed =
            path_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let can_scan = !state.path_input.trim().is_empty() && state.dialog.is_none();
        let scan_btn = ui.add_enabled(
            can_scan,
            egui::Button::new("📂 Scan folder").min_size(egui::vec2(100.0, 28.0)),
        );
        if can_scan && (scan_btn.clicked() || enter_pressed) {
            state.scan_input();
        }

        ui.separator();

        let can_delete = state.selected_record().is_some() && state.dialog.is_none();
        if ui
            .add_enabled(can_delete, egui::Button::new("🗑 Delete selected"))
            .on_disabled_hover_text("Select a file in the list first")
            .clicked()
        {
            state.request_delete_selected();
        }

        let can_export = !state.records.is_empty();
        if ui
            .add_enabled(can_export, egui::Button::new("📤 Export"))
            .on_hover_text("Export the list to CSV")
            .on_disabled_hover_text("Run a scan first to enable export")
            .clicked()
        {
            let target = state.default_export_path();
            // The outcome is reported in the status bar.
            let _ = state.export_csv(&target);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            if state.scan_error_count > 0 {
                ui.separator();
                let label = format!("⚠ {} errors", state.scan_error_count);
                if ui.button(label).on_hover_text("Show scan errors").clicked() {
                    state.show_errors = !state.show_errors;
                }
            }
        });
    });
}
