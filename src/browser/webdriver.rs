// src/browser/webdriver.rs
//
// `Browser` over a W3C WebDriver server (chromedriver). thirtyfour is async;
// the session owns a current-thread tokio runtime and blocks on every call,
// so the rest of the crate stays synchronous.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thirtyfour::prelude::*;
use thirtyfour::{ChromiumLikeCapabilities, WebElement};
use tokio::runtime::{Builder, Runtime};

use super::{Browser, BrowserError};
use crate::config::consts::DRIVER_STARTUP_MS;
use crate::config::settings::DriverSettings;

pub struct WebDriverSession {
    rt: Runtime,
    driver: Option<WebDriver>,
    /// chromedriver we started ourselves, if any.
    child: Option<Child>,
}

impl WebDriverSession {
    /// Start (or attach to) a driver and open a browser window.
    pub fn launch(cfg: &DriverSettings) -> Result<Self, BrowserError> {
        let url = cfg.endpoint();
        let fail = |reason: String| BrowserError::SessionFailed { url: url.clone(), reason };

        let rt = Builder::new_current_thread().enable_all().build()?;

        let child = match &cfg.driver_path {
            Some(path) => Some(spawn_driver(path, cfg.port)?),
            None => None,
        };
        // From here on a failure must not leak the spawned driver.
        let mut session = Self { rt, driver: None, child };

        let mut caps = DesiredCapabilities::chrome();
        if cfg.ignore_certificate_errors {
            caps.add_arg("--ignore-certificate-errors").map_err(|e| fail(e.to_string()))?;
        }
        if cfg.headless {
            caps.set_headless().map_err(|e| fail(e.to_string()))?;
        }

        let deadline = Instant::now() + Duration::from_millis(DRIVER_STARTUP_MS);
        let driver = loop {
            match session.rt.block_on(WebDriver::new(&url, caps.clone())) {
                Ok(d) => break d,
                // A freshly spawned driver needs a moment before it accepts connections.
                Err(e) if session.child.is_some() && Instant::now() < deadline => {
                    logd!("WebDriver: {url} not ready yet ({e})");
                    thread::sleep(Duration::from_millis(250));
                }
                Err(e) => return Err(fail(e.to_string())),
            }
        };

        if cfg.maximize {
            session
                .rt
                .block_on(driver.maximize_window())
                .map_err(|e| fail(e.to_string()))?;
        }
        session.driver = Some(driver);
        logf!("WebDriver: session open at {url}");
        Ok(session)
    }

    fn driver(&self) -> Result<&WebDriver, BrowserError> {
        self.driver
            .as_ref()
            .ok_or_else(|| BrowserError::Driver(s!("session already closed")))
    }

    /// First element matching `xpath`, or `ElementNotFound`.
    fn first(&self, xpath: &str) -> Result<WebElement, BrowserError> {
        let driver = self.driver()?;
        let mut found = self
            .rt
            .block_on(driver.find_all(By::XPath(xpath)))
            .map_err(|e| classify(xpath, e))?;
        if found.is_empty() {
            return Err(BrowserError::not_found(xpath));
        }
        Ok(found.swap_remove(0))
    }

    /// Quit the browser and stop our driver. Safe to call twice.
    pub fn close(&mut self) {
        if let Some(driver) = self.driver.take() {
            if let Err(e) = self.rt.block_on(driver.quit()) {
                loge!("WebDriver: quit failed: {e}");
            }
        }
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for WebDriverSession {
    fn drop(&mut self) {
        self.close();
    }
}

fn spawn_driver(path: &Path, port: u16) -> Result<Child, BrowserError> {
    logf!("WebDriver: spawning {} on port {port}", path.display());
    let child = Command::new(path)
        .arg(format!("--port={port}"))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .inspect_err(|e| loge!("WebDriver: cannot spawn {}: {e}", path.display()))?;
    Ok(child)
}

/// Map driver failures onto the kinds waits know how to tolerate.
fn classify(locator: &str, err: WebDriverError) -> BrowserError {
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();
    if lower.contains("no such element") {
        BrowserError::not_found(locator)
    } else if lower.contains("stale element") {
        BrowserError::stale(locator)
    } else if lower.contains("not interactable") || lower.contains("click intercepted") {
        BrowserError::not_interactable(locator)
    } else {
        BrowserError::Driver(msg)
    }
}

impl Browser for WebDriverSession {
    fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        logd!("WebDriver: goto {url}");
        let driver = self.driver()?;
        self.rt.block_on(driver.goto(url)).map_err(|e| classify(url, e))
    }

    fn count(&mut self, xpath: &str) -> Result<usize, BrowserError> {
        let driver = self.driver()?;
        let found = self
            .rt
            .block_on(driver.find_all(By::XPath(xpath)))
            .map_err(|e| classify(xpath, e))?;
        Ok(found.len())
    }

    fn read_attribute(&mut self, xpath: &str, name: &str) -> Result<Option<String>, BrowserError> {
        let el = self.first(xpath)?;
        self.rt.block_on(el.attr(name)).map_err(|e| classify(xpath, e))
    }

    fn read_inner_html(&mut self, xpath: &str) -> Result<String, BrowserError> {
        let el = self.first(xpath)?;
        self.rt.block_on(el.inner_html()).map_err(|e| classify(xpath, e))
    }

    fn is_clickable(&mut self, xpath: &str) -> Result<bool, BrowserError> {
        let el = match self.first(xpath) {
            Ok(el) => el,
            Err(e) if e.is_not_found() => return Ok(false),
            Err(e) => return Err(e),
        };
        self.rt.block_on(el.is_clickable()).map_err(|e| classify(xpath, e))
    }

    fn click_now(&mut self, xpath: &str) -> Result<(), BrowserError> {
        let el = self.first(xpath)?;
        self.rt.block_on(el.click()).map_err(|e| classify(xpath, e))
    }

    fn type_text(&mut self, xpath: &str, text: &str) -> Result<(), BrowserError> {
        let el = self.first(xpath)?;
        self.rt.block_on(el.send_keys(text)).map_err(|e| classify(xpath, e))
    }

    fn run_script(&mut self, script: &str) -> Result<(), BrowserError> {
        let driver = self.driver()?;
        self.rt
            .block_on(driver.execute(script, Vec::new()))
            .map(|_| ())
            .map_err(|e| BrowserError::Script { reason: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_driver_executable_is_an_io_error() {
        let cfg = DriverSettings {
            driver_path: Some(std::path::PathBuf::from("/nonexistent/dir/chromedriver")),
            ..DriverSettings::default()
        };
        match WebDriverSession::launch(&cfg) {
            Err(BrowserError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            Err(other) => panic!("expected an I/O error, got {other}"),
            Ok(_) => panic!("launched without a driver"),
        }
    }
}
