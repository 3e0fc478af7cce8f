// src/gui/actions/export.rs
use std::error::Error;
use std::path::PathBuf;

use chrono::Local;

use crate::{
    file::{self, stats_file_name},
    gui::app::App,
};

pub fn export(app: &mut App) {
    if app.dataset.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    if app.out_path_dirty {
        logf!("Export: Out path set → {}", app.out_path_text);
        app.out_path_dirty = false;
    }

    let status_msg = match write(app) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {} rows → {}", app.dataset.row_count(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(status_msg);
}

fn write(app: &App) -> Result<PathBuf, Box<dyn Error>> {
    let export = &app.state.options.export;
    let now = Local::now().naive_local();
    let default_name = stats_file_name(app.state.options.scrape.league.label(), &now, export.format.ext());
    let path = file::resolve_out_path(&app.out_path_text, &default_name)?;

    logf!(
        "Export: Begin rows={}, headers={}, format={:?}",
        app.dataset.row_count(),
        export.include_headers,
        export.format
    );
    file::write_dataset(&path, &app.dataset, export)?;
    Ok(path)
}
