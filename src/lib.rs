//! # gcview
//!
//! A viewer for the slicer settings embedded in G-code files.
//!
//! Slicers append the configuration they were run with to the generated
//! toolpath as comment lines (`; layer_height = 0.2`). `gcview` scans a
//! file for a fixed set of those settings and prints them as a tiered
//! report: the simple view shows the basics, the advanced and expert views
//! progressively reveal more.
//!
//! ## Modules
//!
//! - [`config`] - Verbosity tiers and the per-run report configuration
//! - [`extract`] - Line-oriented extraction of settings from comment lines
//! - [`report`] - Tiered, fixed-layout report rendering
//!
//! ## Example
//!
//! ```rust,no_run
//! // gcview is primarily used as a CLI tool:
//! //   gcview --file print.gcode --view expert
//! ```

/// Verbosity tiers and the per-run report configuration.
pub mod config;

/// Extraction of recognized settings from G-code comment lines.
pub mod extract;

/// Tiered, fixed-layout report rendering.
pub mod report;

#[macro_use]
extern crate log;
