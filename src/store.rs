// src/store.rs
//
// The in-memory dataset and its on-disk cache (`.store/player_stats.csv`).
// The cache always holds headers and is always comma-separated, whatever the
// user exported.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{CACHE_FILE, STORE_DIR};
use crate::csv::{read_dataset, write_rows};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers), rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Values of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.as_ref()?.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|r| r.get(idx).map_or("", String::as_str)).collect())
    }
}

pub fn save_cache(ds: &DataSet) -> Result<PathBuf, Box<dyn Error>> {
    save_cache_in(Path::new(STORE_DIR), ds)
}

pub fn save_cache_in(dir: &Path, ds: &DataSet) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let path = dir.join(CACHE_FILE);
    let file = fs::File::create(&path)?;
    write_rows(file, ds.headers.as_deref(), &ds.rows, b',')?;
    logd!("Store: cached {} rows to {}", ds.row_count(), path.display());
    Ok(path)
}

/// `Ok(None)` when nothing has been cached yet.
pub fn load_cache() -> Result<Option<DataSet>, Box<dyn Error>> {
    load_cache_in(Path::new(STORE_DIR))
}

pub fn load_cache_in(dir: &Path) -> Result<Option<DataSet>, Box<dyn Error>> {
    let path = dir.join(CACHE_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let ds = read_dataset(&path, b',', true)?;
    logd!("Store: loaded {} cached rows", ds.row_count());
    Ok(Some(ds))
}
