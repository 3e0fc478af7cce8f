// src/config/state.rs
use super::options::{AgeFilter, AppOptions, DetailedFilters, StatFilter};

/// Form fields as typed in the GUI. Kept as text so half-typed values
/// survive a frame; turned into `StatFilter` when SCRAPE is pressed.
#[derive(Clone, Debug)]
pub struct FilterForm {
    /// "" = current view, a PRESET_TABS entry, or "Detailed"
    pub choice: String,
    pub venue: String,
    pub age_kind: String,
    pub age_value: String,
    pub positions: String,
    pub category: String,
    pub sub_filters: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        let d = DetailedFilters::default();
        Self {
            choice: s!("Summary"),
            venue: d.venue,
            age_kind: s!(AgeFilter::All.label()),
            age_value: s!(),
            positions: d.positions.join(","),
            category: d.category,
            sub_filters: d.sub_filters.join(", "),
        }
    }
}

impl FilterForm {
    pub fn is_detailed(&self) -> bool {
        self.choice.eq_ignore_ascii_case("detailed")
    }

    pub fn to_filter(&self) -> Result<StatFilter, String> {
        use super::options::{parse_list, parse_positions};

        match StatFilter::from_choice(&self.choice) {
            StatFilter::Detailed(_) => {
                let age_value = self.age_value.trim();
                let age = if age_value.is_empty() {
                    None
                } else {
                    Some(age_value.parse::<u32>().map_err(|e| format!("Age '{age_value}': {e}"))?)
                };
                Ok(StatFilter::Detailed(DetailedFilters {
                    venue: s!(self.venue.trim()),
                    age: AgeFilter::from_parts(&self.age_kind, age)?,
                    positions: parse_positions(&self.positions),
                    category: s!(self.category.trim()),
                    sub_filters: parse_list(&self.sub_filters),
                }))
            }
            other => Ok(other),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub filter_form: FilterForm,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filter_form: FilterForm::default(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_summary_preset() {
        let f = FilterForm::default();
        assert_eq!(f.to_filter().unwrap(), StatFilter::Preset(s!("Summary")));
    }

    #[test]
    fn detailed_form_round_trips_defaults() {
        let f = FilterForm { choice: s!("Detailed"), ..FilterForm::default() };
        assert_eq!(f.to_filter().unwrap(), StatFilter::Detailed(DetailedFilters::default()));
    }

    #[test]
    fn detailed_form_rejects_bad_age() {
        let f = FilterForm {
            choice: s!("Detailed"),
            age_kind: s!("More than"),
            age_value: s!("old"),
            ..FilterForm::default()
        };
        assert!(f.to_filter().is_err());
    }
}
