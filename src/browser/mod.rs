// src/browser/mod.rs
//
// Browser automation capability. The scraper only ever talks to a `Browser`;
// `webdriver::WebDriverSession` drives a real browser, `fake::FakeBrowser`
// serves scripted pages for tests and benches.
//
// Implementors supply single-attempt primitives. The waiting helpers are
// built on top of them with a `Wait`, so every implementation gets the same
// bounded-polling behaviour.

pub mod error;
pub mod fake;
pub mod wait;
pub mod webdriver;

pub use error::BrowserError;
pub use wait::Wait;
pub use webdriver::WebDriverSession;

/// All locators are XPath expressions.
pub trait Browser {
    fn goto(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Number of elements currently matching `xpath`. Zero is not an error.
    fn count(&mut self, xpath: &str) -> Result<usize, BrowserError>;

    /// `Ok(None)` when the element exists but lacks the attribute.
    fn read_attribute(&mut self, xpath: &str, name: &str) -> Result<Option<String>, BrowserError>;

    fn read_inner_html(&mut self, xpath: &str) -> Result<String, BrowserError>;

    /// Present, displayed and enabled.
    fn is_clickable(&mut self, xpath: &str) -> Result<bool, BrowserError>;

    fn click_now(&mut self, xpath: &str) -> Result<(), BrowserError>;

    fn type_text(&mut self, xpath: &str, text: &str) -> Result<(), BrowserError>;

    fn run_script(&mut self, script: &str) -> Result<(), BrowserError>;

    /* ---------- waiting helpers ---------- */

    fn wait_present(&mut self, xpath: &str, wait: &Wait) -> Result<(), BrowserError> {
        wait.until(xpath, || Ok((self.count(xpath)? > 0).then_some(())))
    }

    fn wait_clickable(&mut self, xpath: &str, wait: &Wait) -> Result<(), BrowserError> {
        wait.until(xpath, || Ok(self.is_clickable(xpath)?.then_some(())))
    }

    /// Wait until clickable, then click.
    fn click(&mut self, xpath: &str, wait: &Wait) -> Result<(), BrowserError> {
        self.wait_clickable(xpath, wait)?;
        self.click_now(xpath)
    }

    fn attribute(&mut self, xpath: &str, name: &str, wait: &Wait) -> Result<Option<String>, BrowserError> {
        wait.until(xpath, || self.read_attribute(xpath, name).map(Some))
    }

    fn inner_html(&mut self, xpath: &str, wait: &Wait) -> Result<String, BrowserError> {
        wait.until(xpath, || self.read_inner_html(xpath).map(Some))
    }
}
