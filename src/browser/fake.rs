// src/browser/fake.rs
//
// Scripted in-memory DOM. Elements are keyed by the exact XPath the scraper
// will ask for; `count` understands the `prefix[n]` shape the page map uses for
// header cells and body rows. Used by unit tests, integration tests and the
// extraction bench.

use std::collections::HashMap;

use super::{Browser, BrowserError};
use crate::config::page_map::PageMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeElement {
    pub inner_html: String,
    pub attrs: HashMap<String, String>,
    pub clickable: bool,
    /// Identical siblings matched by the same locator (filter chips).
    pub copies: usize,
    /// Clicking removes one copy (a chip's close button).
    pub dismiss_on_click: bool,
}

impl Default for FakeElement {
    fn default() -> Self {
        Self {
            inner_html: s!(),
            attrs: HashMap::new(),
            clickable: true,
            copies: 1,
            dismiss_on_click: false,
        }
    }
}

impl FakeElement {
    pub fn html(inner: &str) -> Self {
        Self { inner_html: s!(inner), ..Self::default() }
    }

    pub fn button() -> Self { Self::default() }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(s!(name), s!(value));
        self
    }

    pub fn unclickable(mut self) -> Self {
        self.clickable = false;
        self
    }

    /// `n` chips that disappear one per click.
    pub fn chips(n: usize) -> Self {
        Self { copies: n, dismiss_on_click: true, ..Self::default() }
    }
}

/// Transient failure injected on the next reads of one locator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glitch {
    Missing,
    Stale,
    /// A failure no wait tolerates (lost session, driver crash).
    Driver,
}

#[derive(Debug, Default)]
pub struct FakeBrowser {
    /// One element map per results page.
    pages: Vec<HashMap<String, FakeElement>>,
    /// Elements present on every page (filters, pager).
    shared: HashMap<String, FakeElement>,
    current: usize,
    next_page: Option<String>,
    glitches: HashMap<String, (Glitch, usize)>,

    pub visited: Vec<String>,
    pub clicks: Vec<String>,
    pub scripts: Vec<String>,
    pub typed: Vec<(String, String)>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self { pages: vec![HashMap::new()], ..Self::default() }
    }

    /// Add an element to page `page` (0-based), growing the page list as needed.
    pub fn insert(&mut self, page: usize, xpath: impl Into<String>, el: FakeElement) {
        while self.pages.len() <= page {
            self.pages.push(HashMap::new());
        }
        self.pages[page].insert(xpath.into(), el);
    }

    pub fn remove(&mut self, page: usize, xpath: &str) -> Option<FakeElement> {
        self.pages.get_mut(page)?.remove(xpath)
    }

    pub fn insert_shared(&mut self, xpath: impl Into<String>, el: FakeElement) {
        self.shared.insert(xpath.into(), el);
    }

    pub fn remove_shared(&mut self, xpath: &str) -> Option<FakeElement> {
        self.shared.remove(xpath)
    }

    pub fn shared_mut(&mut self, xpath: &str) -> Option<&mut FakeElement> {
        self.shared.get_mut(xpath)
    }

    /// Clicking `xpath` moves to the next page (stays put on the last one).
    pub fn set_next_page(&mut self, xpath: impl Into<String>) {
        self.next_page = Some(xpath.into());
    }

    /// Fail the next `times` reads of `xpath` with `kind`.
    pub fn glitch(&mut self, xpath: impl Into<String>, kind: Glitch, times: usize) {
        self.glitches.insert(xpath.into(), (kind, times));
    }

    /// 0-based page currently "rendered".
    pub fn current_page(&self) -> usize { self.current }

    pub fn clicks_on(&self, xpath: &str) -> usize {
        self.clicks.iter().filter(|c| *c == xpath).count()
    }

    fn glitched(&mut self, xpath: &str) -> Result<(), BrowserError> {
        if let Some((kind, left)) = self.glitches.get_mut(xpath) {
            if *left > 0 {
                *left -= 1;
                return Err(match kind {
                    Glitch::Missing => BrowserError::not_found(xpath),
                    Glitch::Stale => BrowserError::stale(xpath),
                    Glitch::Driver => BrowserError::Driver(format!("session lost while reading {xpath}")),
                });
            }
        }
        Ok(())
    }

    fn get(&mut self, xpath: &str) -> Result<&FakeElement, BrowserError> {
        self.glitched(xpath)?;
        self.pages
            .get(self.current)
            .and_then(|p| p.get(xpath))
            .or_else(|| self.shared.get(xpath))
            .ok_or_else(|| BrowserError::not_found(xpath))
    }

    fn get_mut(&mut self, xpath: &str) -> Option<&mut FakeElement> {
        let cur = self.current;
        match self.pages.get_mut(cur) {
            Some(p) if p.contains_key(xpath) => p.get_mut(xpath),
            _ => self.shared.get_mut(xpath),
        }
    }
}

/// `//tbody/tr[12]/td[3]` counts as element 12 of `//tbody/tr`.
fn indexed_under(key: &str, xpath: &str) -> Option<usize> {
    let rest = key.strip_prefix(xpath)?.strip_prefix('[')?;
    let end = rest.find(']')?;
    rest[..end].parse().ok()
}

impl Browser for FakeBrowser {
    fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        self.visited.push(s!(url));
        self.current = 0;
        Ok(())
    }

    fn count(&mut self, xpath: &str) -> Result<usize, BrowserError> {
        self.glitched(xpath)?;
        let page = self.pages.get(self.current).into_iter().flat_map(|p| p.iter());
        let n = page
            .chain(self.shared.iter())
            .map(|(key, el)| {
                if key == xpath { el.copies } else { indexed_under(key, xpath).unwrap_or(0) }
            })
            .max()
            .unwrap_or(0);
        Ok(n)
    }

    fn read_attribute(&mut self, xpath: &str, name: &str) -> Result<Option<String>, BrowserError> {
        Ok(self.get(xpath)?.attrs.get(name).cloned())
    }

    fn read_inner_html(&mut self, xpath: &str) -> Result<String, BrowserError> {
        Ok(self.get(xpath)?.inner_html.clone())
    }

    fn is_clickable(&mut self, xpath: &str) -> Result<bool, BrowserError> {
        match self.get(xpath) {
            Ok(el) => Ok(el.clickable),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn click_now(&mut self, xpath: &str) -> Result<(), BrowserError> {
        if !self.get(xpath)?.clickable {
            return Err(BrowserError::not_interactable(xpath));
        }
        self.clicks.push(s!(xpath));

        if self.next_page.as_deref() == Some(xpath) && self.current + 1 < self.pages.len() {
            self.current += 1;
        }
        if let Some(el) = self.get_mut(xpath) {
            if el.dismiss_on_click {
                el.copies = el.copies.saturating_sub(1);
                if el.copies == 0 {
                    let cur = self.current;
                    if let Some(p) = self.pages.get_mut(cur) {
                        p.remove(xpath);
                    }
                    self.shared.remove(xpath);
                }
            }
        }
        Ok(())
    }

    fn type_text(&mut self, xpath: &str, text: &str) -> Result<(), BrowserError> {
        self.get(xpath)?;
        self.typed.push((s!(xpath), s!(text)));
        Ok(())
    }

    fn run_script(&mut self, script: &str) -> Result<(), BrowserError> {
        self.scripts.push(s!(script));
        Ok(())
    }
}

/* ---------------- Results-table fixture ---------------- */

/// One table row: team, player name, then one value per data header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeRow {
    pub team: String,
    pub name: String,
    pub values: Vec<String>,
}

impl FakeRow {
    pub fn new(team: &str, name: &str, values: &[&str]) -> Self {
        Self {
            team: s!(team),
            name: s!(name),
            values: values.iter().map(|v| s!(*v)).collect(),
        }
    }
}

/// Lays out a stats table the way the page map expects to find it:
/// leading header cells without titles, data headers with a `title`,
/// team/name cells carrying the full text in `title`, nested columns
/// wrapped in the nested tag, and a pager when there is more than one page.
pub struct TableFixture<'a> {
    map: &'a PageMap,
    headers: Vec<String>,
    pages: Vec<Vec<FakeRow>>,
}

impl<'a> TableFixture<'a> {
    pub fn new(map: &'a PageMap, headers: &[&str]) -> Self {
        Self { map, headers: headers.iter().map(|h| s!(*h)).collect(), pages: Vec::new() }
    }

    pub fn page(mut self, rows: Vec<FakeRow>) -> Self {
        self.pages.push(rows);
        self
    }

    /// `n` rows of generated data, named after the page.
    pub fn generated_page(self, rows: usize) -> Self {
        let p = self.pages.len() + 1;
        let cols = self.headers.len();
        let rows = (1..=rows)
            .map(|r| FakeRow {
                team: format!("Team {p}-{r}"),
                name: format!("Player {p}-{r}"),
                values: (1..=cols).map(|c| format!("{p}.{r}.{c}")).collect(),
            })
            .collect();
        self.page(rows)
    }

    pub fn build(self) -> FakeBrowser {
        let map = self.map;
        let mut fake = FakeBrowser::new();
        let total = self.pages.len().max(1);

        for (p, rows) in self.pages.iter().enumerate() {
            for i in 1..map.first_data_header {
                fake.insert(p, map.header_cell(i), FakeElement::html(""));
            }
            for (j, h) in self.headers.iter().enumerate() {
                fake.insert(
                    p,
                    map.header_cell(map.first_data_header + j),
                    FakeElement::html(&abbreviate(h)).attr("title", h),
                );
            }

            for (r, row) in rows.iter().enumerate() {
                let r = r + 1;
                fake.insert(p, format!("{}[{r}]", map.body_rows), FakeElement::default());
                fake.insert(p, map.body_cell(r, 1), FakeElement::html(&r.to_string()));

                let team_cell = map.first_cell;
                fake.insert(
                    p,
                    map.body_cell(r, team_cell),
                    FakeElement::html(r#"<img src="crest.png" alt="">"#).attr("title", &row.team),
                );
                fake.insert(
                    p,
                    map.body_cell(r, team_cell + 1),
                    FakeElement::html(&abbreviate(&row.name)).attr("title", &row.name),
                );

                for (j, value) in row.values.iter().enumerate() {
                    let cell = team_cell + 2 + j;
                    let nested = self.headers.get(j).is_some_and(|h| map.nested_columns.contains(h));
                    if nested {
                        let tag = &map.nested_tag;
                        fake.insert(
                            p,
                            map.body_cell(r, cell),
                            FakeElement::html(&format!(
                                r#"<div><{tag} class="rating">{value}</{tag}><i class="trend">+0.1</i></div>"#
                            )),
                        );
                        fake.insert(p, map.nested_cell(r, cell), FakeElement::html(value));
                    } else {
                        fake.insert(p, map.body_cell(r, cell), FakeElement::html(value));
                    }
                }
            }
        }

        if total > 1 {
            let indicator = if total > 2 { &map.page_count_many } else { &map.page_count_few };
            fake.insert_shared(indicator.clone(), FakeElement::html(&total.to_string()));
            fake.insert_shared(map.next_page.clone(), FakeElement::button());
            fake.set_next_page(map.next_page.clone());
        }
        fake
    }
}

/// What the site prints in a narrow column: "Expected goals" → "Exp...".
fn abbreviate(s: &str) -> String {
    if s.chars().count() <= 6 { s!(s) } else { s.chars().take(3).collect::<String>() + "..." }
}
