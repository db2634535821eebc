//! Report data model.
//!
//! Holds the verbosity tier selector and the configuration a single run
//! operates on: the source file path, the requested tier, and the settings
//! captured by the extraction pass.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// Report verbosity tier.
///
/// Tiers are ordered: everything visible at `Simple` is visible at
/// `Advanced`, and everything visible at `Advanced` is visible at `Expert`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViewTier {
    /// Basic settings only.
    #[default]
    Simple,
    /// Also show settings marked `[A]`.
    Advanced,
    /// Also show settings marked `[E]`.
    Expert,
}

impl fmt::Display for ViewTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewTier::Simple => "Simple",
            ViewTier::Advanced => "Advanced",
            ViewTier::Expert => "Expert",
        })
    }
}

/// Captured settings, keyed by canonical setting name.
pub type SettingsMap = HashMap<&'static str, String>;

/// Everything one run needs to render a report.
///
/// Built once after the extraction pass completes and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Path of the G-code file the settings were read from.
    pub file: PathBuf,
    /// Requested verbosity tier.
    pub view: ViewTier,
    /// Settings captured from the file.
    pub settings: SettingsMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(ViewTier::Simple < ViewTier::Advanced);
        assert!(ViewTier::Advanced < ViewTier::Expert);
        assert_eq!(ViewTier::default(), ViewTier::Simple);
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!(
            ViewTier::from_str("simple", true),
            Ok(ViewTier::Simple)
        );
        assert_eq!(
            ViewTier::from_str("ADVANCED", true),
            Ok(ViewTier::Advanced)
        );
        assert_eq!(
            ViewTier::from_str("Expert", true),
            Ok(ViewTier::Expert)
        );
        assert!(ViewTier::from_str("bogus", true).is_err());
    }

    #[test]
    fn tier_display_names() {
        assert_eq!(ViewTier::Simple.to_string(), "Simple");
        assert_eq!(ViewTier::Advanced.to_string(), "Advanced");
        assert_eq!(ViewTier::Expert.to_string(), "Expert");
    }
}
