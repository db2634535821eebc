//! Extraction of slicer settings from G-code comment lines.
//!
//! Slicers write their configuration into the generated toolpath as
//! comment lines of the form `; layer_height = 0.2`. The scan tokenizes
//! every line into a `name = value` pair and keeps the values whose name
//! is in the fixed recognized set. Names must match exactly, so
//! `external_perimeters_first` can never populate `perimeters`. When a
//! name occurs more than once the last occurrence wins.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::config::SettingsMap;

/// Separator between a setting name and its value.
const SEPARATOR: &str = " = ";

/// One recognized setting name.
pub struct SettingSpec {
    /// Canonical name, exactly as it appears in the file.
    pub name: &'static str,
    /// Whether `1`/`0` values carry on/off semantics.
    pub flag: bool,
}

impl SettingSpec {
    const fn new(name: &'static str, flag: bool) -> Self {
        Self { name, flag }
    }
}

/// The closed set of setting names the scan recognizes.
pub const KNOWN_SETTINGS: &[SettingSpec] = &[
    SettingSpec::new("layer_height", false),
    SettingSpec::new("first_layer_height", false),
    SettingSpec::new("perimeters", false),
    SettingSpec::new("spiral_vase", true),
    SettingSpec::new("top_solid_layers", false),
    SettingSpec::new("bottom_solid_layers", false),
    SettingSpec::new("top_solid_min_thickness", false),
    SettingSpec::new("bottom_solid_min_thickness", false),
    SettingSpec::new("extra_perimeters", true),
    SettingSpec::new("ensure_vertical_shell_thickness", true),
    SettingSpec::new("avoid_crossing_perimeters", true),
    SettingSpec::new("avoid_crossing_perimeters_max_detour", false),
    SettingSpec::new("thin_walls", true),
    SettingSpec::new("thick_bridges", true),
    SettingSpec::new("seam_position", false),
    SettingSpec::new("external_perimeters_first", true),
    SettingSpec::new("gap_fill_enabled", true),
    SettingSpec::new("perimeter_generator", false),
    SettingSpec::new("fuzzy_skin", false),
    SettingSpec::new("fuzzy_skin_thickness", false),
    SettingSpec::new("fuzzy_skin_point_dist", false),
    SettingSpec::new("fill_density", false),
    SettingSpec::new("fill_pattern", false),
    SettingSpec::new("support_material", true),
    SettingSpec::new("support_material_auto", true),
];

/// Looks up a recognized setting by exact name.
fn lookup(name: &str) -> Option<&'static SettingSpec> {
    KNOWN_SETTINGS.iter().find(|s| s.name == name)
}

/// Capitalizes a value the way the report shows it: first character
/// uppercased, the rest lowercased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Splits a line into a candidate `(name, value)` pair.
///
/// Leading whitespace and `;` comment markers are stripped, then the line
/// is split once on `" = "`. The comment marker is optional: any line that
/// tokenizes cleanly is a candidate. Returns `None` for lines without the
/// separator.
fn split_setting(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start().trim_start_matches(';').trim_start();
    let (name, value) = line.split_once(SEPARATOR)?;
    Some((name.trim(), value.trim()))
}

/// Stored representation of a raw value.
///
/// Values stay display strings; settings flagged as on/off switches map
/// raw `1`/`0` to `True`/`False`.
fn store_value(spec: &SettingSpec, raw: &str) -> String {
    if spec.flag {
        match raw {
            "1" => return "True".to_string(),
            "0" => return "False".to_string(),
            _ => {}
        }
    }
    capitalize(raw)
}

/// Scans the input and captures every recognized setting.
///
/// Unrecognized names and lines without a `name = value` shape are skipped
/// silently; a repeated name overwrites the earlier capture.
///
/// # Errors
///
/// Returns an error if reading from the input fails.
pub fn scan<R: BufRead>(reader: R) -> Result<SettingsMap> {
    let mut settings = SettingsMap::new();

    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        if let Some((name, raw)) = split_setting(&line) {
            if let Some(spec) = lookup(name) {
                let value = store_value(spec, raw);
                debug!("captured {} = {}", spec.name, value);
                settings.insert(spec.name, value);
            }
        }
    }

    info!("captured {} recognized settings", settings.len());
    Ok(settings)
}
