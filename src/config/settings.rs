// src/config/settings.rs
//
// Run settings: where the WebDriver lives, how long to wait, where output
// goes, and the page map. Read from `fbstats_scrape.toml` in the working
// directory when present; every key is optional.
//
// ```toml
// advance_retries = 3
// output_dir = "out"
//
// [driver]
// driver_path = "C:/tools/chromedriver.exe"   # spawn it ourselves
// headless = true
//
// [timeouts]
// cell_secs = 20.0
//
// [pages]
// nested_columns = ["Rating"]
// ```

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::consts::*;
use super::page_map::PageMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub driver: DriverSettings,
    pub timeouts: Timeouts,
    /// Next-page attempts before a scan is abandoned.
    pub advance_retries: u32,
    pub output_dir: PathBuf,
    pub pages: PageMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            driver: DriverSettings::default(),
            timeouts: Timeouts::default(),
            advance_retries: ADVANCE_RETRIES,
            output_dir: PathBuf::from(DEFAULT_OUT_DIR),
            pages: PageMap::default(),
        }
    }
}

impl Settings {
    /// Load from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            logd!("Settings: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let settings = Self::parse(&text)
            .map_err(|e| format!("Invalid settings file {}: {e}", path.display()))?;
        logf!("Settings: loaded {}", path.display());
        Ok(settings)
    }

    /// `fbstats_scrape.toml` in the working directory.
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load(Path::new(SETTINGS_FILE))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    /// WebDriver endpoint. Ignored when `driver_path` is set.
    pub server_url: String,
    /// Driver executable to spawn. When unset, connect to `server_url`.
    pub driver_path: Option<PathBuf>,
    /// Port for a spawned driver.
    pub port: u16,
    pub headless: bool,
    pub ignore_certificate_errors: bool,
    pub maximize: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            server_url: s!(DRIVER_URL),
            driver_path: None,
            port: DRIVER_PORT,
            headless: false,
            ignore_certificate_errors: true,
            maximize: true,
        }
    }
}

impl DriverSettings {
    /// URL the session connects to.
    pub fn endpoint(&self) -> String {
        match self.driver_path {
            Some(_) => format!("http://localhost:{}", self.port),
            None => self.server_url.clone(),
        }
    }
}

/// Bounded waits, in seconds (poll interval in milliseconds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    /// Plain element lookups.
    pub lookup_secs: f64,
    /// Each table cell read.
    pub cell_secs: f64,
    /// Preset filter tab and venue buttons.
    pub filter_secs: f64,
    /// The "Detailed" tab, which renders late.
    pub detailed_secs: f64,
    pub season_secs: f64,
    pub age_secs: f64,
    pub next_page_secs: f64,
    /// Fixed pause after navigation clicks.
    pub settle_secs: f64,
    pub poll_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            lookup_secs: 5.0,
            cell_secs: 15.0,
            filter_secs: 30.0,
            detailed_secs: 45.0,
            season_secs: 20.0,
            age_secs: 10.0,
            next_page_secs: 15.0,
            settle_secs: 5.0,
            poll_ms: 250,
        }
    }
}

fn secs(v: f64) -> Duration {
    Duration::from_secs_f64(v.max(0.0))
}

impl Timeouts {
    /// Zero waits: every lookup is tried exactly once. Offline runs use this.
    pub fn immediate() -> Self {
        Self {
            lookup_secs: 0.0,
            cell_secs: 0.0,
            filter_secs: 0.0,
            detailed_secs: 0.0,
            season_secs: 0.0,
            age_secs: 0.0,
            next_page_secs: 0.0,
            settle_secs: 0.0,
            poll_ms: 0,
        }
    }

    pub fn lookup(&self) -> Duration { secs(self.lookup_secs) }
    pub fn cell(&self) -> Duration { secs(self.cell_secs) }
    pub fn filter(&self) -> Duration { secs(self.filter_secs) }
    pub fn detailed(&self) -> Duration { secs(self.detailed_secs) }
    pub fn season(&self) -> Duration { secs(self.season_secs) }
    pub fn age(&self) -> Duration { secs(self.age_secs) }
    pub fn next_page(&self) -> Duration { secs(self.next_page_secs) }
    pub fn settle(&self) -> Duration { secs(self.settle_secs) }
    pub fn poll(&self) -> Duration { Duration::from_millis(self.poll_ms) }
}
