// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod browser;
pub mod config;
pub mod core;
pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
