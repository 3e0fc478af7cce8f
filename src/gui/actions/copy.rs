// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.dataset.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = to_export_string(&app.dataset, export.include_headers, export.format);
    logf!(
        "Copy: rows={}, headers={}, format={:?}",
        app.dataset.row_count(),
        export.include_headers,
        export.format
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
