// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage line printed by `gen_font_inc` when no font path is given.
pub const FONT_USAGE: &str = "usage: gen_font_inc <8x8 .fnt font file path>";
