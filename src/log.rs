// src/log.rs
//
// File logger. Everything goes through `tracing`; `init()` points the
// subscriber at `.store/debug.log`. Call sites use the short macros below.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once. Later calls are no-ops.
/// Failing to open the log file is not fatal; logging is then disabled.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = fs::create_dir_all(STORE_DIR);
        let path = Path::new(STORE_DIR).join(LOG_FILE);
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            return;
        };

        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("fbstats_scrape=debug,warn"));

        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
