// src/config/page_map.rs
//
// Every locator the scraper uses, keyed by what the element *is* rather than
// how the site happens to style it this month. Values are XPath templates;
// `{name}` placeholders are filled by `fill`. When the site markup drifts,
// override the affected entries in the settings file instead of touching code.

use serde::{Deserialize, Serialize};

use super::consts::CURRENT_SEASON;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMap {
    /* ---- season picker ---- */
    /// Label shown on the season dropdown before a pick.
    pub current_season: String,
    pub season_dropdown: String,
    pub season_option: String,

    /* ---- filters ---- */
    /// Run before touching filter controls; some leagues only render them once scrolled into view.
    pub scroll_script: String,
    pub preset_tab: String,
    pub detailed_tab: String,
    pub venue_option: String,
    pub age_dropdown: String,
    pub age_option: String,
    pub age_input: String,
    pub position_toggle: String,
    pub active_sub_filter: String,
    pub filter_category: String,
    pub sub_filter_option: String,
    pub apply_filters: String,

    /* ---- results table ---- */
    pub header_cells: String,
    pub header_cell: String,
    pub body_rows: String,
    pub body_cell: String,
    pub nested_cell: String,
    pub nested_tag: String,

    /// 1-based index of the first header cell that names a data column.
    pub first_data_header: usize,
    /// 1-based table cell holding mapping column 0 ("Team").
    pub first_cell: usize,
    /// Cells whose text is truncated on screen; read their `title` instead.
    pub title_cells: Vec<usize>,
    /// Columns rendered inside a styled child element.
    pub nested_columns: Vec<String>,

    /* ---- pagination ---- */
    /// Page-count label when the pager shows first/…/last buttons.
    pub page_count_many: String,
    /// Page-count label when the pager only has a couple of buttons.
    pub page_count_few: String,
    pub next_page: String,
}

impl Default for PageMap {
    fn default() -> Self {
        const PAGER: &str = r#"//div[@class="sc-hLBbgP sc-eDvSVe NWuJg hryjgv"]"#;
        const TABS: &str = r#"//div[@class="sc-hLBbgP Hbif"]"#;

        Self {
            current_season: s!(CURRENT_SEASON),
            season_dropdown: s!(r#"//span[text()="{season}"]"#),
            season_option: s!(r#"//li[text()="{season}"]"#),

            scroll_script: s!("window.scrollTo(0,1800)"),
            preset_tab: join!(TABS, r#"/button[@data-tabid="{tab}"]"#),
            detailed_tab: join!(TABS, r#"/button[text()="Detailed"]"#),
            venue_option: s!(r#"//div[@class="sc-dkrFOg goGQQW"]/button/span[text()="{venue}"]"#),
            age_dropdown: s!(r#"//div[@class="sc-hLBbgP hQYrtA"]/div[3]/div/div/button"#),
            age_option: s!(r#"//ul[@class="sc-hLBbgP dRtNhU"]/li[text()="{age_type}"]"#),
            age_input: s!(r#"//input[@class="sc-hLBbgP liJFaS"]"#),
            position_toggle: s!(r#"//label[@for="checkbox-{position}-undefined"]"#),
            active_sub_filter: s!(r#"//button[@class="sc-bcXHqe gJZAMC"]"#),
            filter_category: s!(r#"//button[@class="sc-bcXHqe lfmpW"][{index}]"#),
            sub_filter_option: s!(
                r#"//div[@class="sc-hLBbgP sc-eDvSVe gjJmZQ jaJHeQ"]/label/div/div/span[text()="{sub_filter}"]"#
            ),
            apply_filters: s!(r#"//button[@class="sc-bcXHqe ewHKoF"]"#),

            header_cells: s!("//thead/tr/th"),
            header_cell: s!("//thead/tr/th[{index}]"),
            body_rows: s!("//tbody/tr"),
            body_cell: s!("//tbody/tr[{row}]/td[{cell}]"),
            nested_cell: s!("//tbody/tr[{row}]/td[{cell}]/{tag}"),
            nested_tag: s!("span"),

            first_data_header: 4,
            first_cell: 2,
            title_cells: vec![2, 3],
            nested_columns: vec![s!("Rating")],

            page_count_many: join!(PAGER, "/div/button[3]/span"),
            page_count_few: join!(PAGER, "/div/button[2]/span"),
            next_page: join!(PAGER, "/button[2]"),
        }
    }
}

impl PageMap {
    pub fn header_cell(&self, index: usize) -> String {
        fill(&self.header_cell, &[("index", index.to_string().as_str())])
    }

    pub fn body_cell(&self, row: usize, cell: usize) -> String {
        fill(&self.body_cell, &[("row", row.to_string().as_str()), ("cell", cell.to_string().as_str())])
    }

    pub fn nested_cell(&self, row: usize, cell: usize) -> String {
        fill(
            &self.nested_cell,
            &[
                ("row", row.to_string().as_str()),
                ("cell", cell.to_string().as_str()),
                ("tag", self.nested_tag.as_str()),
            ],
        )
    }
}

/// Substitute `{key}` placeholders. Unknown placeholders are left as-is.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = s!(template);
    for (key, value) in args {
        out = out.replace(&join!("{", key, "}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_every_placeholder() {
        let t = "//tbody/tr[{row}]/td[{cell}]/td[{cell}]";
        assert_eq!(fill(t, &[("row", "3"), ("cell", "7")]), "//tbody/tr[3]/td[7]/td[7]");
        assert_eq!(fill("//x[{missing}]", &[("row", "1")]), "//x[{missing}]");
    }

    #[test]
    fn cell_locators_follow_templates() {
        let map = PageMap::default();
        assert_eq!(map.body_cell(2, 4), "//tbody/tr[2]/td[4]");
        assert_eq!(map.nested_cell(1, 9), "//tbody/tr[1]/td[9]/span");
        assert_eq!(map.header_cell(4), "//thead/tr/th[4]");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let map: PageMap = toml::from_str(
            r#"
            nested_tag = "div"
            nested_columns = ["Rating", "Form"]
            "#,
        )
        .unwrap();
        assert_eq!(map.nested_cell(1, 2), "//tbody/tr[1]/td[2]/div");
        assert_eq!(map.nested_columns, vec!["Rating", "Form"]);
        assert_eq!(map.body_rows, PageMap::default().body_rows);
    }
}
