/// Main `eframe::App` implementation for FileHelper.
///
/// Top-level layout: toolbar on top, status bar at the bottom, the file
/// table filling the centre, and any pending dialog floating above.
use crate::state::AppState;
use crate::widgets;

/// The FileHelper application.
pub struct FileHelperApp {
    state: AppState,
}

impl FileHelperApp {
    /// Create a new application instance from pre-built state.
    ///
    /// Build the state before `eframe::run_native` so configuration errors
    /// are reported before the window opens.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state }
    }
}

impl eframe::App for FileHelperApp {
    /// Override the GPU clear colour to match the active theme background.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel (file list) ─────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            // Rows are not interactive while a dialog is waiting for an answer.
            ui.add_enabled_ui(self.state.dialog.is_none(), |ui| {
                widgets::file_table::file_table(ui, &mut self.state);
            });
        });

        // ── Floating windows ──────────────────────────────────────────────
        widgets::dialogs::scan_errors(ctx, &mut self.state);
        widgets::dialogs::pending_dialog(ctx, &mut self.state);
    }
}
