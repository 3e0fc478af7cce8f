// src/specs/season.rs

use std::thread;

use crate::browser::{Browser, Wait};
use crate::config::options::League;
use crate::config::page_map::fill;
use crate::config::settings::Settings;
use crate::scrape::ScrapeError;

/// Open the league's page and switch the season dropdown to `season`.
pub fn open_page<B: Browser + ?Sized>(
    browser: &mut B,
    settings: &Settings,
    league: League,
    season: &str,
) -> Result<(), ScrapeError> {
    let pages = &settings.pages;
    let t = &settings.timeouts;

    logf!("Season: opening {league} ({})", league.url());
    browser.goto(league.url())?;

    let wait = Wait::up_to(t.season(), t.poll());
    let dropdown = fill(&pages.season_dropdown, &[("season", pages.current_season.as_str())]);
    browser.click(&dropdown, &wait)?;

    let option = fill(&pages.season_option, &[("season", season)]);
    browser.click(&option, &wait)?;
    logd!("Season: picked {season}");

    thread::sleep(t.settle());
    Ok(())
}
