// src/lib.rs
//! `catter`: concatenate files or standard input, optionally numbering lines.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use catter_core::{CatError, Catter, Source};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
