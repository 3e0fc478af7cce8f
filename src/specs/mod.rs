// src/specs/mod.rs
//! # Site navigation ("specs")
//!
//! This module knows **how to drive the statistics site** up to the point where
//! the results table shows what the user asked for. It never reads the table;
//! that is `scrape`'s job.
//!
//! ## What lives here
//! - **League and season selection** (`season::open_page`): navigate to the
//!   league's tournament page and pick the season from the dropdown.
//! - **Filter application** (`filters`): either a preset stat tab
//!   (Summary, Attack, ...) or the detailed form (venue, age, positions,
//!   sub-filter category and up to five sub-filters).
//!
//! ## What does **not** live here
//! - **Locators.** Every XPath comes from `config::page_map::PageMap`, so markup
//!   drift is fixed in the settings file, not here.
//! - **Waiting policy.** Timeouts come from `config::settings::Timeouts`; the
//!   polling itself is `browser::Wait`.
//! - **Input validation against the site.** A venue or sub-filter the UI does
//!   not offer shows up as a lookup timeout. Only values that must be mapped to
//!   an index (the sub-filter category) are checked up front.
//!
//! ## Typical call chain
//! ```text
//! runner::collect → specs::season::open_page
//!                 → specs::filters::apply_filter
//!                 → scrape::establish_schema → scrape::scan_remaining_pages
//! ```
//!
//! ## Conventions
//! - Every click goes through `Browser::click` with a bounded wait.
//! - After a click that re-renders the table, sleep `timeouts.settle`.
//! - Functions are generic over `Browser`, so the fake DOM exercises the same code.

pub mod filters;
pub mod season;

pub use filters::{apply_detailed_filters, apply_filter, apply_preset_filter};
pub use season::open_page;
