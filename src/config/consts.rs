// src/config/consts.rs

// Site
pub const PL_PAGE_URL: &str = "https://www.sofascore.com/tournament/football/england/premier-league/17";
pub const LALIGA_PAGE_URL: &str = "https://www.sofascore.com/tournament/football/spain/laliga/8";
pub const BUNDESLIGA_PAGE_URL: &str = "https://www.sofascore.com/tournament/football/germany/bundesliga/35";
pub const SERIE_A_PAGE_URL: &str = "https://www.sofascore.com/tournament/football/italy/serie-a/23";
pub const UCL_PAGE_URL: &str = "https://www.sofascore.com/tournament/football/europe/uefa-champions-league/7";

/// Label the season dropdown shows before a season is picked.
pub const CURRENT_SEASON: &str = "23/24";
pub const DEFAULT_SEASON: &str = "21/22";

// WebDriver
pub const DRIVER_URL: &str = "http://localhost:9515";
pub const DRIVER_PORT: u16 = 9515;
pub const DRIVER_STARTUP_MS: u64 = 10_000;

// Filters
pub const MAX_SUB_FILTERS: usize = 5;
pub const MAX_FILTER_CLEAR_CLICKS: usize = 32;
pub const POSITIONS: [&str; 4] = ["G", "D", "M", "F"];

// Scan
pub const ADVANCE_RETRIES: u32 = 3;

// Local cache + log
pub const STORE_DIR: &str = ".store";
pub const CACHE_FILE: &str = "player_stats.csv";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "FBSTATS_LOG";

// Settings
pub const SETTINGS_FILE: &str = "fbstats_scrape.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const STATS_STEM: &str = "player_stats";
pub const STAMP_FORMAT: &str = "%m-%d_%H%M";
