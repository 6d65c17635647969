//! HP-GL/2 Input
//!
//! A parser for the HP-GL/2 plotter command language that extracts the
//! pen moves of a plot.
//!
//! This library provides:
//! - A lazy scanner yielding Pen Up / Pen Down coordinate pairs
//! - Classified errors for malformed plot files
//! - Folding of pen events into move/line paths
//! - Configuration and the `hpgl-scan` command-line driver

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod path;

// Re-exports for clean public API
pub use config::Config;
pub use error::ParseError;
pub use parser::{parse_hpgl, scan_commands, PenEvent, PenKind};
pub use path::PlotPath;
