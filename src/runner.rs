// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use chrono::Local;

use crate::{
    browser::{Browser, WebDriverSession},
    config::{
        options::{ExportOptions, ScrapeOptions},
        settings::Settings,
    },
    file::save_player_stats,
    progress::Progress,
    scrape::{self, ScrapeError},
    specs,
    store::{self, DataSet},
};

/// What a run produced.
pub struct RunSummary {
    pub dataset: DataSet,
    pub path: PathBuf,
}

/// Navigate, filter and scrape every page. Generic over the browser so the
/// whole flow runs against the fake DOM as well.
pub fn collect<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
    options: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<DataSet, ScrapeError> {
    progress.log(&format!("Opening {} {}", options.league, options.season));
    specs::open_page(browser, settings, options.league, &options.season)?;

    progress.log(&format!("Applying filter: {}", options.filter.label()));
    specs::apply_filter(browser, settings, &options.filter)?;

    progress.log("Reading table");
    let mapping = scrape::establish_schema(browser, settings)?;
    scrape::scan_remaining_pages(browser, mapping, settings, progress)
}

/// Launch a real browser, collect, write the timestamped export and refresh
/// the cache. The session closes when this returns, also on error.
pub fn run(
    settings: &Settings,
    options: &ScrapeOptions,
    export: &ExportOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    logf!("Run: {} {} [{}]", options.league, options.season, options.filter.label());
    progress.log("Starting browser");

    let result = (|| -> Result<RunSummary, Box<dyn Error>> {
        let mut session = WebDriverSession::launch(&settings.driver)?;
        let dataset = collect(&mut session, settings, options, progress)?;
        drop(session);

        let now = Local::now().naive_local();
        let path = save_player_stats(&dataset, options.league.label(), export, &now)?;
        if let Err(e) = store::save_cache(&dataset) {
            // Only the GUI startup view reads the cache.
            loge!("Run: could not update cache: {e}");
        }
        Ok(RunSummary { dataset, path })
    })();

    match &result {
        Ok(s) => {
            logf!("Run: {} rows written to {}", s.dataset.row_count(), s.path.display());
            progress.log(&format!("Saved {} rows to {}", s.dataset.row_count(), s.path.display()));
        }
        Err(e) => {
            loge!("Run failed: {e}");
            progress.log(&format!("Failed: {e}"));
        }
    }
    progress.finish();
    result
}
