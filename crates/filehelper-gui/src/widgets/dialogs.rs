/// Modal dialogs -- confirmations, warnings, errors, and the scan error list.
use crate::state::AppState;

/// Show the pending dialog, if any, and apply the user's answer.
pub fn pending_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = &state.dialog else {
        return;
    };
    let title = dialog.title();
    let message = dialog.message().to_owned();
    let is_confirmation = dialog.is_confirmation();

    let mut confirmed = false;
    let mut dismissed = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(300.0)
                .show(ui, |ui| {
                    ui.label(&message);
                });
            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if is_confirmation {
                    if ui.button("Yes").clicked() {
                        confirmed = true;
                    }
                    if ui.button("No").clicked() {
                        dismissed = true;
                    }
                } else if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if confirmed {
        state.confirm_dialog();
    } else if dismissed {
        state.dismiss_dialog();
    }
}

/// Window listing the errors from the last scan.
pub fn scan_errors(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_errors;
    egui::Window::new("Scan errors")
        .open(&mut open)
        .default_size([520.0, 300.0])
        .show(ctx, |ui| {
            if state.scan_error_count > state.scan_errors.len() {
                ui.label(
                    egui::RichText::new(format!(
                        "Showing the first {} of {} errors",
                        state.scan_errors.len(),
                        state.scan_error_count
                    ))
                    .color(ui.visuals().weak_text_color()),
                );
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for line in &state.scan_errors {
                    ui.label(egui::RichText::new(line).monospace().size(11.0));
                }
            });
        });
    state.show_errors = open;
}
