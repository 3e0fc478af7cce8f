// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use crate::{
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Start a scrape on a worker thread. The browser session lives and dies on
/// that thread; the UI only watches the status line and the result channel.
pub fn scrape(app: &mut App) {
    if app.is_running() {
        logd!("Scrape: Clicked while a scrape is running");
        return;
    }

    match app.state.gui.filter_form.to_filter() {
        Ok(filter) => {
            app.state.options.scrape.filter = filter;
            app.form_error = None;
        }
        Err(e) => {
            loge!("Scrape: Invalid filter form: {e}");
            app.status(format!("Invalid filter: {e}"));
            app.form_error = Some(e);
            return;
        }
    }

    let settings = app.settings.clone();
    let scrape = app.state.options.scrape.clone();
    let mut export = app.state.options.export.clone();
    export.out_dir = settings.output_dir.clone();
    let status = app.status.clone();

    logf!(
        "Scrape: Begin league={} season={} filter={:?}",
        scrape.league,
        scrape.season,
        scrape.filter
    );

    let (tx, rx) = mpsc::channel();
    app.running = Some(rx);
    app.status("Starting…");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome = runner::run(&settings, &scrape, &export, &mut prog).map_err(|e| e.to_string());
        // The UI may be gone already; nothing left to do then.
        let _ = tx.send(outcome);
    });
}
