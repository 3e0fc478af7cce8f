// src/cli.rs
//
// Interactive front-end: no flags, every choice is prompted for.

use std::error::Error;

use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::{
    config::{
        consts::{DEFAULT_SEASON, MAX_SUB_FILTERS},
        options::{
            AgeFilter, DetailedFilters, ExportFormat, ExportOptions, League, ScrapeOptions, StatFilter,
            CATEGORIES, PRESET_TABS, parse_list, parse_positions,
        },
        settings::Settings,
    },
    progress::Progress,
    runner::{self, RunSummary},
};

const VENUES: [&str; 3] = ["Overall", "Home", "Away"];
const CURRENT_VIEW: &str = "(current view)";

/// Prints progress lines to stdout.
pub struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total_pages: usize) {
        self.total = total_pages;
        println!("{total_pages} page(s) to scrape");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn page_done(&mut self, page: u32, rows: usize) {
        println!("  page {page}/{}: {rows} rows", self.total);
    }
}

pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    let settings = Settings::load_default()?;
    let scrape = prompt_scrape_options()?;
    let format = prompt_format()?;
    let export = ExportOptions { format, out_dir: settings.output_dir.clone(), ..ExportOptions::default() };

    let mut progress = CliProgress { total: 0 };
    runner::run(&settings, &scrape, &export, &mut progress)
}

fn theme() -> ColorfulTheme { ColorfulTheme::default() }

fn select(prompt: &str, items: &[&str], default: usize) -> Result<usize, Box<dyn Error>> {
    Ok(Select::with_theme(&theme())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()?)
}

fn text(prompt: &str, default: &str) -> Result<String, Box<dyn Error>> {
    Ok(Input::<String>::with_theme(&theme())
        .with_prompt(prompt)
        .default(s!(default))
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_scrape_options() -> Result<ScrapeOptions, Box<dyn Error>> {
    let labels: Vec<&str> = League::ALL.iter().map(|l| l.label()).collect();
    let league = League::ALL[select("League", &labels, 0)?];
    let season = text("Season", DEFAULT_SEASON)?;

    let mut choices: Vec<&str> = PRESET_TABS.to_vec();
    choices.push("Detailed");
    choices.push(CURRENT_VIEW);
    let picked = choices[select("Filter", &choices, 0)?];

    let filter = match picked {
        CURRENT_VIEW => StatFilter::Current,
        "Detailed" => StatFilter::Detailed(prompt_detailed()?),
        tab => StatFilter::Preset(s!(tab)),
    };

    Ok(ScrapeOptions { league, season: s!(season.trim()), filter })
}

fn prompt_detailed() -> Result<DetailedFilters, Box<dyn Error>> {
    let defaults = DetailedFilters::default();

    let venue = VENUES[select("Venue", &VENUES, 0)?];

    let kind = AgeFilter::KINDS[select("Age filter", &AgeFilter::KINDS, 0)?];
    let age_value = if kind == "All" {
        None
    } else {
        Some(
            Input::<u32>::with_theme(&theme())
                .with_prompt("Age")
                .interact_text()?,
        )
    };
    let age = AgeFilter::from_parts(kind, age_value)?;

    let positions = parse_positions(&text("Positions (comma separated)", &defaults.positions.join(","))?);
    let category = CATEGORIES[select("Sub-filter category", &CATEGORIES, 0)?];

    let sub_filters = parse_list(&text(
        &format!("Sub-filters (comma separated, max {MAX_SUB_FILTERS})"),
        &defaults.sub_filters.join(", "),
    )?);
    if sub_filters.len() > MAX_SUB_FILTERS {
        println!("Only the first {MAX_SUB_FILTERS} sub-filters are used.");
    }

    Ok(DetailedFilters {
        venue: s!(venue),
        age,
        positions,
        category: s!(category),
        sub_filters,
    })
}

fn prompt_format() -> Result<ExportFormat, Box<dyn Error>> {
    Ok(match select("Output format", &["CSV", "TSV"], 0)? {
        1 => ExportFormat::Tsv,
        _ => ExportFormat::Csv,
    })
}
