//! Error types for the browser layer.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while driving the browser session.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Could not start the driver or open a session.
    #[error("failed to start WebDriver session at {url}: {reason}")]
    SessionFailed { url: String, reason: String },

    /// The located element is not in the DOM.
    #[error("element not found: {locator}")]
    ElementNotFound { locator: String },

    /// The element existed but was detached or replaced (e.g. after a page change).
    #[error("stale element reference: {locator}")]
    StaleElement { locator: String },

    /// The element is present but cannot be clicked or typed into.
    #[error("element not interactable: {locator}")]
    NotInteractable { locator: String },

    /// A bounded wait elapsed before its condition held.
    #[error("timed out after {after:?} waiting for {what}")]
    Timeout { what: String, after: Duration },

    /// Script execution in page context failed.
    #[error("script failed: {reason}")]
    Script { reason: String },

    /// Any other WebDriver failure.
    #[error("WebDriver error: {0}")]
    Driver(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BrowserError {
    pub fn not_found(locator: &str) -> Self {
        BrowserError::ElementNotFound { locator: s!(locator) }
    }

    pub fn stale(locator: &str) -> Self {
        BrowserError::StaleElement { locator: s!(locator) }
    }

    pub fn not_interactable(locator: &str) -> Self {
        BrowserError::NotInteractable { locator: s!(locator) }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BrowserError::ElementNotFound { .. })
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, BrowserError::StaleElement { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, BrowserError::Timeout { .. })
    }
}
