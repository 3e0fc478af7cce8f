// src/scrape/mod.rs
//
// Results-table extraction. `schema` works out the columns and reads page 1,
// `pages` walks the remaining pages with the same per-column strategy.

pub mod columns;
pub mod pages;
pub mod schema;

use thiserror::Error;

use crate::browser::BrowserError;

pub use columns::{CellSource, ColumnMapping, ColumnSpec, PageColumns};
pub use pages::{PageCount, advance_page, probe_page_count, scan_remaining_pages};
pub use schema::{column_specs, discover_headers, establish_schema, extract_page};

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// A user-supplied value has no counterpart on the site.
    #[error("unknown {what}: {value}")]
    UnknownInput { what: &'static str, value: String },

    /// Columns of one page disagree on the number of rows.
    #[error("page {page}: column '{column}' has {got} values, expected {expected}")]
    RaggedPage { page: u32, column: String, got: usize, expected: usize },

    /// The next-page control could not be used.
    #[error("could not advance to page {page} after {attempts} attempts")]
    PageAdvance {
        page: u32,
        attempts: u32,
        #[source]
        source: BrowserError,
    },
}

impl ScrapeError {
    pub fn unknown_category(value: &str) -> Self {
        ScrapeError::UnknownInput { what: "filter category", value: s!(value) }
    }
}
