// src/scrape/pages.rs
//
// Pagination. Page 1 is already in the mapping when the scan starts, so a
// table of N pages takes exactly N-1 next-page clicks.

use std::thread;

use super::columns::ColumnMapping;
use super::schema::{cell_wait, extract_page};
use super::ScrapeError;
use crate::browser::{Browser, BrowserError, Wait};
use crate::config::page_map::PageMap;
use crate::config::settings::Settings;
use crate::core::cell_text;
use crate::progress::Progress;
use crate::store::DataSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCount {
    Single,
    Many(u32),
}

impl PageCount {
    pub fn total(self) -> u32 {
        match self {
            PageCount::Single => 1,
            PageCount::Many(n) => n,
        }
    }
}

/// Read the page total from the pager. The pager has two layouts; neither
/// being present (or neither holding a number) means a single page.
pub fn probe_page_count<B: Browser + ?Sized>(
    browser: &mut B,
    pages: &PageMap,
) -> Result<PageCount, BrowserError> {
    for indicator in [&pages.page_count_many, &pages.page_count_few] {
        if browser.count(indicator)? == 0 {
            continue;
        }
        let text = match browser.read_inner_html(indicator) {
            Ok(html) => cell_text(&html),
            Err(e) if e.is_not_found() => continue,
            Err(e) => return Err(e),
        };
        match text.parse::<u32>() {
            Ok(n) if n > 1 => return Ok(PageCount::Many(n)),
            Ok(_) => return Ok(PageCount::Single),
            Err(_) => logd!("Pages: indicator text {text:?} is not a page count"),
        }
    }
    Ok(PageCount::Single)
}

/// Click the next-page control and let the table settle. Retried up to
/// `advance_retries` attempts in total; then the scan is over.
pub fn advance_page<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
    page: u32,
) -> Result<(), ScrapeError> {
    let t = &settings.timeouts;
    let wait = Wait::up_to(t.next_page(), t.poll()).ignoring_stale();
    let attempts = settings.advance_retries.max(1);

    let mut attempt = 0;
    loop {
        attempt += 1;
        match browser.click(&settings.pages.next_page, &wait) {
            Ok(()) => {
                thread::sleep(t.settle());
                return Ok(());
            }
            Err(e) if attempt < attempts => {
                loge!("Pages: advance to page {page} failed (attempt {attempt}/{attempts}): {e}");
            }
            Err(source) => {
                loge!("Pages: giving up on page {page}: {source}");
                return Err(ScrapeError::PageAdvance { page, attempts: attempt, source });
            }
        }
    }
}

/// Walk pages 2..N with the mapping's strategy table and materialize the
/// dataset. A failed advance aborts the whole scan.
pub fn scan_remaining_pages<B: Browser + ?Sized>(
    browser: &mut B,
    mut mapping: ColumnMapping,
    settings: &Settings,
    progress: &mut dyn Progress,
) -> Result<DataSet, ScrapeError> {
    let total = probe_page_count(browser, &settings.pages)?.total();
    logf!("Pages: {total} page(s)");
    progress.begin(total as usize);
    progress.page_done(1, mapping.row_count());

    let wait = cell_wait(settings);
    for page in 2..=total {
        progress.log(&format!("Page {page}/{total}"));
        advance_page(browser, settings, page)?;
        let columns = extract_page(browser, &settings.pages, mapping.specs(), &wait)?;
        let rows = mapping.push_page(page, columns)?;
        logd!("Pages: page {page} gave {rows} rows");
        progress.page_done(page, rows);
    }

    Ok(mapping.into_dataset())
}
