/// Virtualised file list -- one row per record, largest first.
///
/// Only the rows in view are formatted each frame, so very large scans
/// stay responsive.
use crate::state::AppState;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use filehelper_core::report::RecordRow;

const ROW_HEIGHT: f32 = 20.0;

/// Draw the file table and update the selection on click.
pub fn file_table(ui: &mut Ui, state: &mut AppState) {
    if state.records.is_empty() {
        let text = if state.scan_root.is_some() {
            "No files found"
        } else {
            "Choose a folder and press Scan"
        };
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(text)
                    .color(ui.visuals().weak_text_color())
                    .italics(),
            );
        });
        return;
    }

    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_accent = ui.visuals().hyperlink_color;
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .column(Column::remainder().at_least(200.0).clip(true))
        .column(Column::exact(110.0))
        .column(Column::exact(160.0))
        .column(Column::exact(110.0))
        .header(22.0, |mut header| {
            for title in ["Name", "Size", "Created", "Status"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.records.len(), |mut row| {
                let index = row.index();
                let Some(record) = state.records.get(index) else {
                    return;
                };
                let cells = RecordRow::from_record(record);
                let flagged = record.is_special();
                row.set_selected(state.selected == Some(index));

                row.col(|ui| {
                    let name = egui::RichText::new(&cells.name);
                    ui.label(if flagged { name.color(color_accent).strong() } else { name })
                        .on_hover_text(record.path.to_string_lossy().into_owned());
                });
                row.col(|ui| {
                    ui.label(&cells.size);
                });
                row.col(|ui| {
                    ui.label(&cells.created);
                });
                row.col(|ui| {
                    let status = egui::RichText::new(cells.status);
                    ui.label(if record.available {
                        status
                    } else {
                        status.color(color_warning)
                    });
                });

                if row.response().clicked() {
                    clicked = Some(index);
                }
            });
        });

    if let Some(index) = clicked {
        state.select(index);
    }
}
