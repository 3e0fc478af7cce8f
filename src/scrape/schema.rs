// src/scrape/schema.rs
//
// Schema discovery: read the header row, decide per column how its cells are
// read, and extract the first page. The strategy table built here is reused
// unchanged for every later page.

use super::columns::{CellSource, ColumnMapping, ColumnSpec, PageColumns};
use super::ScrapeError;
use crate::browser::{Browser, BrowserError, Wait};
use crate::config::page_map::PageMap;
use crate::config::settings::Settings;
use crate::core::{cell_text, sanitize::normalize_ws};

/// Leading mapping columns, read from cells `first_cell` and `first_cell + 1`.
pub const FIXED_COLUMNS: [&str; 2] = ["Team", "Name"];

/// Data-column titles from the header row, left to right, up to the first
/// header cell that is absent or has no title.
pub fn discover_headers<B: Browser + ?Sized>(
    browser: &mut B,
    pages: &PageMap,
) -> Result<Vec<String>, BrowserError> {
    let total = browser.count(&pages.header_cells)?;
    let mut headers = Vec::new();
    for i in pages.first_data_header..=total {
        let title = match browser.read_attribute(&pages.header_cell(i), "title") {
            Ok(title) => title,
            Err(e) if e.is_not_found() => break,
            Err(e) => return Err(e),
        };
        match title.map(|t| normalize_ws(&t)) {
            Some(t) if !t.is_empty() => headers.push(t),
            _ => break,
        }
    }
    logd!("Schema: {} of {total} header cells carry titles", headers.len());
    Ok(headers)
}

/// One spec per column. A title that repeats an earlier name gets a
/// " (2)", " (3)", ... suffix so every key stays unique.
pub fn column_specs(headers: &[String], pages: &PageMap) -> Vec<ColumnSpec> {
    let titles = FIXED_COLUMNS.iter().map(|n| s!(*n)).chain(headers.iter().cloned());

    let mut specs: Vec<ColumnSpec> = Vec::with_capacity(FIXED_COLUMNS.len() + headers.len());
    for (i, title) in titles.enumerate() {
        let cell = pages.first_cell + i;
        let source = if pages.title_cells.contains(&cell) {
            CellSource::Title
        } else if pages.nested_columns.contains(&title) {
            CellSource::Nested
        } else {
            CellSource::Content
        };

        let mut name = title.clone();
        let mut n = 1;
        while specs.iter().any(|s| s.name == name) {
            n += 1;
            name = format!("{title} ({n})");
        }
        if n > 1 {
            logd!("Schema: header {title:?} in cell {cell} repeats, keyed as {name:?}");
        }
        specs.push(ColumnSpec { name, cell, source });
    }
    specs
}

/// Every visible row of the current page, one sequence per spec.
pub fn extract_page<B: Browser + ?Sized>(
    browser: &mut B,
    pages: &PageMap,
    specs: &[ColumnSpec],
    wait: &Wait,
) -> Result<PageColumns, BrowserError> {
    let rows = browser.count(&pages.body_rows)?;
    let mut columns = Vec::with_capacity(specs.len());
    for spec in specs {
        let mut values = Vec::with_capacity(rows);
        for r in 1..=rows {
            values.push(read_cell(browser, pages, spec, r, wait)?);
        }
        columns.push(values);
    }
    Ok(columns)
}

fn read_cell<B: Browser + ?Sized>(
    browser: &mut B,
    pages: &PageMap,
    spec: &ColumnSpec,
    row: usize,
    wait: &Wait,
) -> Result<String, BrowserError> {
    match spec.source {
        CellSource::Title => {
            let title = browser.attribute(&pages.body_cell(row, spec.cell), "title", wait)?;
            Ok(title.map(|t| normalize_ws(&t)).unwrap_or_default())
        }
        // Rendered text of the child element, same as plain cells.
        CellSource::Nested => {
            let html = browser.inner_html(&pages.nested_cell(row, spec.cell), wait)?;
            Ok(cell_text(&html))
        }
        CellSource::Content => {
            let html = browser.inner_html(&pages.body_cell(row, spec.cell), wait)?;
            Ok(cell_text(&html))
        }
    }
}

/// Per-cell wait: bounded, tolerant of missing and stale cells while the
/// table re-renders.
pub fn cell_wait(settings: &Settings) -> Wait {
    Wait::up_to(settings.timeouts.cell(), settings.timeouts.poll()).ignoring_stale()
}

/// Headers → strategy table → page 1.
pub fn establish_schema<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
) -> Result<ColumnMapping, ScrapeError> {
    let pages = &settings.pages;
    let wait = cell_wait(settings);
    browser.wait_present(&pages.header_cells, &wait)?;

    let headers = discover_headers(browser, pages)?;
    let specs = column_specs(&headers, pages);
    let first = extract_page(browser, pages, &specs, &wait)?;

    let mut mapping = ColumnMapping::new(specs);
    let rows = mapping.push_page(1, first)?;
    logf!("Schema: {} columns, {rows} rows on page 1", mapping.specs().len());
    Ok(mapping)
}
