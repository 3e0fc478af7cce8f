// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes scrape progress into the status line the UI thread draws.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    rows: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, rows: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total_pages: usize) {
        self.total = total_pages;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn page_done(&mut self, page: u32, rows: usize) {
        self.done += 1;
        self.rows += rows;
        self.set_status(format!("Page {page}/{} ({} rows so far)", self.total, self.rows));
    }
    fn finish(&mut self) {
        logd!("GUI: progress finished after {}/{} pages", self.done, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_updates_accumulate_rows() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(3);
        p.page_done(1, 20);
        p.page_done(2, 20);
        assert_eq!(*status.lock().unwrap(), "Page 2/3 (40 rows so far)");
    }
}
