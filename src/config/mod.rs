// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod page_map;
pub mod settings;
pub mod state;
