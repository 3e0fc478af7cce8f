// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum League {
    #[default]
    PremierLeague,
    LaLiga,
    Bundesliga,
    SerieA,
    Ucl,
}

impl League {
    pub const ALL: [League; 5] = [
        League::PremierLeague,
        League::LaLiga,
        League::Bundesliga,
        League::SerieA,
        League::Ucl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            League::PremierLeague => "Premier League",
            League::LaLiga        => "LaLiga",
            League::Bundesliga    => "Bundesliga",
            League::SerieA        => "Serie A",
            League::Ucl           => "UCL",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            League::PremierLeague => PL_PAGE_URL,
            League::LaLiga        => LALIGA_PAGE_URL,
            League::Bundesliga    => BUNDESLIGA_PAGE_URL,
            League::SerieA        => SERIE_A_PAGE_URL,
            League::Ucl           => UCL_PAGE_URL,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Preset stat tabs offered above the table.
pub const PRESET_TABS: [&str; 5] = ["Summary", "Attack", "Defence", "Passing", "Goalkeeper"];

/// Sub-filter categories in the order the detailed form lists them.
pub const CATEGORIES: [&str; 5] = ["Attack", "Defence", "Passing", "Goalkeeper", "Other"];

/// 1-based button index of a sub-filter category.
pub fn category_index(name: &str) -> Option<usize> {
    let name = name.trim();
    CATEGORIES
        .iter()
        .position(|c| c.eq_ignore_ascii_case(name))
        .map(|i| i + 1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AgeFilter {
    #[default]
    All,
    MoreThan(u32),
    Equals(u32),
    LessThan(u32),
}

impl AgeFilter {
    pub const KINDS: [&'static str; 4] = ["All", "More than", "Equals", "Less than"];

    /// Text of the dropdown option.
    pub fn label(&self) -> &'static str {
        match self {
            AgeFilter::All         => "All",
            AgeFilter::MoreThan(_) => "More than",
            AgeFilter::Equals(_)   => "Equals",
            AgeFilter::LessThan(_) => "Less than",
        }
    }

    pub fn age(&self) -> Option<u32> {
        match *self {
            AgeFilter::All => None,
            AgeFilter::MoreThan(a) | AgeFilter::Equals(a) | AgeFilter::LessThan(a) => Some(a),
        }
    }

    /// Build from the prompt answers. Anything but "All" needs an age.
    pub fn from_parts(kind: &str, age: Option<u32>) -> Result<Self, String> {
        let kind = kind.trim();
        if kind.is_empty() || kind.eq_ignore_ascii_case("all") {
            return Ok(AgeFilter::All);
        }
        let age = age.ok_or_else(|| format!("Age filter '{kind}' needs an age"))?;
        match kind.to_ascii_lowercase().as_str() {
            "more than" => Ok(AgeFilter::MoreThan(age)),
            "equals"    => Ok(AgeFilter::Equals(age)),
            "less than" => Ok(AgeFilter::LessThan(age)),
            other => Err(format!("Unknown age filter: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailedFilters {
    /// "Overall", "Home" or "Away"
    pub venue: String,
    pub age: AgeFilter,
    /// Subset of G, D, M, F to keep
    pub positions: Vec<String>,
    pub category: String,
    /// At most MAX_SUB_FILTERS; see `sub_filters_capped`
    pub sub_filters: Vec<String>,
}

impl Default for DetailedFilters {
    fn default() -> Self {
        Self {
            venue: s!("Overall"),
            age: AgeFilter::All,
            positions: POSITIONS.iter().map(|p| s!(*p)).collect(),
            category: s!("Attack"),
            sub_filters: ["Goals", "Shots on target", "Total shots", "Rating"]
                .iter()
                .map(|f| s!(*f))
                .collect(),
        }
    }
}

impl DetailedFilters {
    /// The site accepts five sub-filters; extra entries are dropped.
    pub fn sub_filters_capped(&self) -> &[String] {
        let n = self.sub_filters.len().min(MAX_SUB_FILTERS);
        &self.sub_filters[..n]
    }

    /// Positions the form should untick.
    pub fn positions_to_clear(&self) -> Vec<&'static str> {
        POSITIONS
            .iter()
            .copied()
            .filter(|p| !self.positions.iter().any(|k| k.eq_ignore_ascii_case(p)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatFilter {
    /// Scrape whatever the table currently shows.
    Current,
    /// One of PRESET_TABS.
    Preset(String),
    Detailed(DetailedFilters),
}

impl Default for StatFilter {
    fn default() -> Self { StatFilter::Preset(s!("Summary")) }
}

impl StatFilter {
    /// Prompt answer → filter. Empty means "current view".
    pub fn from_choice(choice: &str) -> StatFilter {
        let c = choice.trim();
        if c.is_empty() || c.eq_ignore_ascii_case("none") {
            StatFilter::Current
        } else if c.eq_ignore_ascii_case("detailed") {
            StatFilter::Detailed(DetailedFilters::default())
        } else {
            StatFilter::Preset(s!(c))
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StatFilter::Current     => "Current",
            StatFilter::Preset(tab) => tab,
            StatFilter::Detailed(_) => "Detailed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub league: League,
    pub season: String,
    pub filter: StatFilter,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            league: League::PremierLeague,
            season: s!(DEFAULT_SEASON),
            filter: StatFilter::default(),
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delimiter(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

/* ---------------- Prompt parsing ---------------- */

/// "a, b,,c " → ["a", "b", "c"]
pub fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| s!(p))
        .collect()
}

/// Like `parse_list`, uppercased (position codes).
pub fn parse_positions(s: &str) -> Vec<String> {
    parse_list(s).into_iter().map(|p| p.to_ascii_uppercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_indices_are_one_based() {
        assert_eq!(category_index("Attack"), Some(1));
        assert_eq!(category_index("other"), Some(5));
        assert_eq!(category_index("Set pieces"), None);
    }

    #[test]
    fn age_filter_needs_age_unless_all() {
        assert_eq!(AgeFilter::from_parts("All", None), Ok(AgeFilter::All));
        assert_eq!(AgeFilter::from_parts("", Some(3)), Ok(AgeFilter::All));
        assert_eq!(AgeFilter::from_parts("Less than", Some(23)), Ok(AgeFilter::LessThan(23)));
        assert!(AgeFilter::from_parts("Equals", None).is_err());
        assert!(AgeFilter::from_parts("Older", Some(30)).is_err());
    }

    #[test]
    fn list_answers_are_trimmed_and_filtered() {
        assert_eq!(parse_list(" Goals, Total shots,, Rating "), vec!["Goals", "Total shots", "Rating"]);
        assert_eq!(parse_positions("g, m"), vec!["G", "M"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn detailed_filters_cap_and_positions() {
        let mut d = DetailedFilters::default();
        d.sub_filters = parse_list("a,b,c,d,e,f,g");
        assert_eq!(d.sub_filters_capped().len(), MAX_SUB_FILTERS);
        d.positions = parse_positions("D,F");
        assert_eq!(d.positions_to_clear(), vec!["G", "M"]);
    }

    #[test]
    fn filter_choice_parsing() {
        assert_eq!(StatFilter::from_choice(""), StatFilter::Current);
        assert_eq!(StatFilter::from_choice("detailed"), StatFilter::Detailed(DetailedFilters::default()));
        assert_eq!(StatFilter::from_choice("Goalkeeper"), StatFilter::Preset(s!("Goalkeeper")));
    }
}
