// src/gui/components/data_table.rs
//
// Read-only view of the current dataset.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ds = &app.dataset;
    let cols = ds.header_count();
    if cols == 0 {
        ui.centered_and_justified(|ui| {
            ui.label("No data yet. Pick a league and press SCRAPE.");
        });
        return;
    }

    ui.label(format!("{} rows × {} columns", ds.row_count(), cols));

    // Reserve space for scroll bars instead of overlaying the last row/column.
    ui.style_mut().spacing.scroll.floating = false;

    egui::ScrollArea::horizontal()
        .id_salt("data_table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0);

            // Team and Name are wide; stats are narrow numbers.
            for ci in 0..cols {
                let w = if ci < 2 { 150.0 } else { 70.0 };
                table = table.column(Column::initial(w).at_least(24.0).clip(true));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        let title = ds.headers.as_ref().and_then(|h| h.get(ci)).map_or("", String::as_str);
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                            ui.label(RichText::new(title).strong()).on_hover_text(title);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, ds.row_count(), |mut row| {
                        let r = &ds.rows[row.index()];
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.label(r.get(ci).map_or("", String::as_str));
                            });
                        }
                    });
                });
        });
}
