// src/specs/filters.rs

use std::thread;

use crate::browser::{Browser, BrowserError, Wait};
use crate::config::consts::{MAX_FILTER_CLEAR_CLICKS, MAX_SUB_FILTERS};
use crate::config::options::{DetailedFilters, StatFilter, category_index};
use crate::config::page_map::fill;
use crate::config::settings::Settings;
use crate::scrape::ScrapeError;

pub fn apply_filter<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
    filter: &StatFilter,
) -> Result<(), ScrapeError> {
    match filter {
        StatFilter::Current => {
            logd!("Filters: keeping the current view");
            Ok(())
        }
        StatFilter::Preset(tab) => apply_preset_filter(browser, settings, tab),
        StatFilter::Detailed(d) => apply_detailed_filters(browser, settings, d),
    }
}

/// Some leagues only render the filter controls once scrolled into view.
fn scroll_to_filters<B: Browser + ?Sized>(browser: &mut B, settings: &Settings) -> Result<(), BrowserError> {
    browser.run_script(&settings.pages.scroll_script)
}

/// Click one of the preset tabs ("Summary", "Attack", ...).
pub fn apply_preset_filter<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
    tab: &str,
) -> Result<(), ScrapeError> {
    let t = &settings.timeouts;
    scroll_to_filters(browser, settings)?;

    let id = tab.trim().to_lowercase();
    let button = fill(&settings.pages.preset_tab, &[("tab", id.as_str())]);
    browser.click(&button, &Wait::up_to(t.filter(), t.poll()))?;
    logf!("Filters: preset tab '{id}'");

    thread::sleep(t.settle());
    Ok(())
}

/// Fill in and apply the detailed filter form.
pub fn apply_detailed_filters<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
    d: &DetailedFilters,
) -> Result<(), ScrapeError> {
    let pages = &settings.pages;
    let t = &settings.timeouts;
    let poll = t.poll();

    // The category is the one input mapped to a button index; reject it before clicking anything.
    let category = category_index(&d.category).ok_or_else(|| ScrapeError::unknown_category(&d.category))?;

    scroll_to_filters(browser, settings)?;
    browser.click(&pages.detailed_tab, &Wait::up_to(t.detailed(), poll))?;

    let filter_wait = Wait::up_to(t.filter(), poll);
    let lookup = Wait::up_to(t.lookup(), poll);

    browser.click(&fill(&pages.venue_option, &[("venue", d.venue.as_str())]), &filter_wait)?;

    if let Some(age) = d.age.age() {
        let age_wait = Wait::up_to(t.age(), poll);
        browser.click(&pages.age_dropdown, &age_wait)?;
        browser.click(&fill(&pages.age_option, &[("age_type", d.age.label())]), &age_wait)?;
        browser.wait_present(&pages.age_input, &age_wait)?;
        browser.type_text(&pages.age_input, &age.to_string())?;
        logd!("Filters: age {} {age}", d.age.label());
    }

    for position in d.positions_to_clear() {
        browser.click(&fill(&pages.position_toggle, &[("position", position)]), &lookup)?;
    }

    clear_sub_filters(browser, settings, &lookup)?;

    browser.click(&fill(&pages.filter_category, &[("index", category.to_string().as_str())]), &filter_wait)?;

    if d.sub_filters.len() > MAX_SUB_FILTERS {
        logf!(
            "Filters: only {MAX_SUB_FILTERS} sub-filters allowed, dropping {:?}",
            &d.sub_filters[MAX_SUB_FILTERS..]
        );
    }
    for sub in d.sub_filters_capped() {
        browser.click(&fill(&pages.sub_filter_option, &[("sub_filter", sub.as_str())]), &filter_wait)?;
    }

    browser.click(&pages.apply_filters, &filter_wait)?;
    logf!("Filters: detailed form applied ({}, {})", d.venue, d.category);

    thread::sleep(t.settle());
    Ok(())
}

/// Dismiss every active sub-filter chip, at most MAX_FILTER_CLEAR_CLICKS times.
fn clear_sub_filters<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
    wait: &Wait,
) -> Result<(), BrowserError> {
    let chip = &settings.pages.active_sub_filter;
    let mut clicks = 0;
    while browser.count(chip)? > 0 {
        if clicks == MAX_FILTER_CLEAR_CLICKS {
            return Err(BrowserError::Timeout {
                what: format!("active sub-filters to clear after {clicks} clicks"),
                after: wait.timeout(),
            });
        }
        browser.click(chip, wait)?;
        clicks += 1;
    }
    logd!("Filters: cleared {clicks} active sub-filters");
    Ok(())
}
