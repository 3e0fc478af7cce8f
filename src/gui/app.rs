// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{settings::Settings, state::AppState},
    gui::components::{data_table, export_bar, filter_panel},
    runner::RunSummary,
    store::{self, DataSet},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load_default()?;
    eframe::run_native(
        "Football Stats Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default(), settings)))),
    )?;
    Ok(())
}

/// Result of a scrape, sent back from the worker thread.
pub type ScrapeOutcome = Result<RunSummary, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings: Settings,

    // output text field UX (mapped onto ExportOptions on Export)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // what the table shows
    pub dataset: DataSet,

    // status/progress (the worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: Option<Receiver<ScrapeOutcome>>,

    // last error from the filter form, shown under it
    pub form_error: Option<String>,
}

impl App {
    pub fn new(mut state: AppState, settings: Settings) -> Self {
        state.options.export.out_dir = settings.output_dir.clone();

        let mut status = s!("Idle");
        let dataset = match store::load_cache() {
            Ok(Some(ds)) if !ds.is_empty() => {
                logf!("Cache: loaded {} rows, {} columns", ds.row_count(), ds.header_count());
                status = s!("Loaded last scrape");
                ds
            }
            Ok(_) => DataSet::default(),
            Err(e) => {
                loge!("Cache: unreadable, ignoring: {e}");
                DataSet::default()
            }
        };

        let out_path_text = state.options.export.out_dir.to_string_lossy().into_owned();

        Self {
            state,
            settings,
            out_path_text,
            out_path_dirty: false,
            dataset,
            status: Arc::new(Mutex::new(status)),
            running: None,
            form_error: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn is_running(&self) -> bool { self.running.is_some() }

    /// Pick up a finished worker, if any.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.running else { return };
        match rx.try_recv() {
            Ok(Ok(summary)) => {
                logf!("Scrape: OK rows={} path={}", summary.dataset.row_count(), summary.path.display());
                self.status(format!(
                    "Scraped {} rows → {}",
                    summary.dataset.row_count(),
                    summary.path.display()
                ));
                self.dataset = summary.dataset;
                self.running = None;
            }
            Ok(Err(e)) => {
                loge!("Scrape: Error: {e}");
                self.status(format!("Error: {e}"));
                self.running = None;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {}
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                loge!("Scrape: worker vanished without a result");
                self.status("Error: scrape worker stopped unexpectedly");
                self.running = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.is_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            export_bar::draw(ui, self);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
