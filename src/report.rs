//! Tiered, fixed-layout report rendering.
//!
//! The report layout is a static table of sections and fields rendered by
//! one generic loop. Each field names the setting it reads, the lowest
//! tier at which it prints, a unit suffix, and the placeholder shown when
//! the setting was never captured. Field labels are padded to a fixed
//! column so values line up.

use crate::config::ViewTier::{Advanced, Expert, Simple};
use crate::config::{ReportConfig, SettingsMap, ViewTier};

/// Width of the label column, after the four-space field indent.
const LABEL_WIDTH: usize = 38;

/// One report line bound to a captured setting.
struct FieldSpec {
    /// Label text, without the tier marker.
    label: &'static str,
    /// Name of the setting the value comes from.
    key: &'static str,
    /// Lowest tier at which the line prints.
    tier: ViewTier,
    /// Unit suffix appended to present values.
    suffix: &'static str,
    /// Text shown when the setting was never captured.
    missing: &'static str,
}

/// A titled group of report lines.
struct SectionSpec {
    /// Top-level group header printed before the section, if any.
    group: Option<&'static str>,
    /// Section title.
    title: &'static str,
    /// Lowest tier at which the section prints at all.
    tier: ViewTier,
    /// Fields in print order.
    fields: &'static [FieldSpec],
}

const fn field(
    label: &'static str,
    key: &'static str,
    tier: ViewTier,
    suffix: &'static str,
    missing: &'static str,
) -> FieldSpec {
    FieldSpec {
        label,
        key,
        tier,
        suffix,
        missing,
    }
}

/// The whole report, in print order.
///
/// "Detect bridging perimeters" reads the `overhangs` setting, which the
/// extractor does not capture; its `????` placeholder always shows.
static SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        group: Some("Layers and perimeters:"),
        title: "Layer height:",
        tier: Simple,
        fields: &[
            field("Layer height:", "layer_height", Simple, " mm", ""),
            field("First layer height:", "first_layer_height", Simple, " mm", ""),
        ],
    },
    SectionSpec {
        group: None,
        title: "Vertical shells:",
        tier: Simple,
        fields: &[
            field("Perimeters:", "perimeters", Simple, " (minimum)", ""),
            field("Spiral vase:", "spiral_vase", Simple, "", ""),
        ],
    },
    SectionSpec {
        group: None,
        title: "Horizontal shells:",
        tier: Simple,
        fields: &[
            field("Top Solid layers:", "top_solid_layers", Simple, "", ""),
            field("Bottom Solid layers:", "bottom_solid_layers", Simple, "", ""),
            field("Top Minimum shell thickness:", "top_solid_min_thickness", Simple, " mm", ""),
            field(
                "Bottom Minimum shell thickness:",
                "bottom_solid_min_thickness",
                Simple,
                " mm",
                "",
            ),
        ],
    },
    SectionSpec {
        group: None,
        title: "Quality (slower slicing) [Advanced+]:",
        tier: Advanced,
        fields: &[
            field("Extra perimeters if needed:", "extra_perimeters", Expert, "", ""),
            field(
                "Ensure vertical shell thickness:",
                "ensure_vertical_shell_thickness",
                Advanced,
                "",
                "",
            ),
            field("Avoid crossing perimeters:", "avoid_crossing_perimeters", Advanced, "", ""),
            field(
                "Max detour length:",
                "avoid_crossing_perimeters_max_detour",
                Expert,
                "",
                "",
            ),
            field("Detect thin walls:", "thin_walls", Advanced, "", ""),
            field("Thick bridges:", "thick_bridges", Advanced, "", ""),
            field("Detect bridging perimeters:", "overhangs", Advanced, "", "????"),
        ],
    },
    SectionSpec {
        group: None,
        title: "Advanced",
        tier: Simple,
        fields: &[
            field("Seam position:", "seam_position", Simple, "", ""),
            field(
                "External perimeters first:",
                "external_perimeters_first",
                Expert,
                "",
                "",
            ),
            field("Fill gaps:", "gap_fill_enabled", Advanced, "", ""),
            field("Perimeter generator:", "perimeter_generator", Advanced, "", ""),
        ],
    },
    SectionSpec {
        group: None,
        title: "Fuzzy skin (experimental)",
        tier: Simple,
        fields: &[
            field("Fuzzy Skin:", "fuzzy_skin", Simple, "", ""),
            field("Fuzzy skin thickness:", "fuzzy_skin_thickness", Advanced, " mm", ""),
            field("Fuzzy skin point distance:", "fuzzy_skin_point_dist", Advanced, " mm", ""),
        ],
    },
    SectionSpec {
        group: Some("Infill:"),
        title: "Infill:",
        tier: Simple,
        fields: &[
            field("Fill density:", "fill_density", Simple, "", ""),
            field("Fill pattern:", "fill_pattern", Simple, "", ""),
        ],
    },
    SectionSpec {
        group: Some("Support material:"),
        title: "Support material:",
        tier: Simple,
        fields: &[
            field("Generate support material:", "support_material", Simple, "", ""),
            field("Auto generated supports:", "support_material_auto", Simple, "", ""),
        ],
    },
];

/// Marker prefixed to a field label, derived from its tier.
fn tier_marker(tier: ViewTier) -> &'static str {
    match tier {
        Simple => "",
        Advanced => "[A] ",
        Expert => "[E] ",
    }
}

/// Renders one field line. Missing settings render the field's placeholder
/// with no unit suffix.
fn render_field(field: &FieldSpec, settings: &SettingsMap) -> String {
    let label = format!("{}{}", tier_marker(field.tier), field.label);
    let value = match settings.get(field.key) {
        Some(v) => format!("{}{}", v, field.suffix),
        None => field.missing.to_string(),
    };
    let line = format!("    {:<width$}{}", label, value, width = LABEL_WIDTH);
    format!("{}\n", line.trim_end())
}

/// Renders the full report for `config`.
///
/// Output is deterministic; rendering never fails. Sections and fields
/// above the requested tier are omitted, everything else prints in the
/// fixed order of the layout table.
pub fn render(config: &ReportConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Viewing: {} [{}]\n\n",
        config.file.display(),
        config.view
    ));

    let visible: Vec<&SectionSpec> = SECTIONS
        .iter()
        .filter(|section| section.tier <= config.view)
        .collect();

    for (i, section) in visible.iter().enumerate() {
        if let Some(group) = section.group {
            out.push_str(group);
            out.push_str("\n\n");
        }
        out.push_str(&format!("  {}\n", section.title));
        for field in section.fields {
            if field.tier > config.view {
                continue;
            }
            out.push_str(&render_field(field, &config.settings));
        }
        if i + 1 < visible.len() {
            out.push('\n');
        }
    }

    out
}

/// Prints the report to standard output.
pub fn print_report(config: &ReportConfig) {
    print!("{}", render(config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;
    use std::io::Cursor;
    use std::path::PathBuf;

    const SAMPLE: &str = "\
; layer_height = 0.2
; first_layer_height = 0.3
; perimeters = 3
; spiral_vase = 1
; top_solid_layers = 5
; bottom_solid_layers = 4
; top_solid_min_thickness = 0.7
; bottom_solid_min_thickness = 0.5
; extra_perimeters = 0
; ensure_vertical_shell_thickness = 1
; avoid_crossing_perimeters = 0
; avoid_crossing_perimeters_max_detour = 0
; thin_walls = 0
; thick_bridges = 1
; seam_position = rear
; external_perimeters_first = 0
; gap_fill_enabled = 1
; perimeter_generator = arachne
; fuzzy_skin = none
; fuzzy_skin_thickness = 0.3
; fuzzy_skin_point_dist = 0.8
; fill_density = 15%
; fill_pattern = gyroid
; support_material = 0
; support_material_auto = 1
";

    fn sample_config(view: ViewTier) -> ReportConfig {
        ReportConfig {
            file: PathBuf::from("test.gcode"),
            view,
            settings: extract::scan(Cursor::new(SAMPLE)).unwrap(),
        }
    }

    #[test]
    fn header_names_file_and_tier() {
        let out = render(&sample_config(Simple));
        assert!(out.starts_with("Viewing: test.gcode [Simple]\n\n"));

        let out = render(&sample_config(Expert));
        assert!(out.starts_with("Viewing: test.gcode [Expert]\n\n"));
    }

    #[test]
    fn simple_view_hides_tiered_fields() {
        let out = render(&sample_config(Simple));
        assert!(!out.contains("[A]"));
        assert!(!out.contains("[E]"));
        assert!(!out.contains("Quality (slower slicing)"));
    }

    #[test]
    fn advanced_view_shows_a_but_not_e() {
        let out = render(&sample_config(Advanced));
        assert!(out.contains("[A] Detect thin walls:"));
        assert!(out.contains("Quality (slower slicing) [Advanced+]:"));
        assert!(!out.contains("[E]"));
        assert!(!out.contains("Extra perimeters if needed:"));
        assert!(!out.contains("External perimeters first:"));
    }

    #[test]
    fn expert_view_shows_everything() {
        let out = render(&sample_config(Expert));
        assert!(out.contains("[E] Extra perimeters if needed:"));
        assert!(out.contains("[E] Max detour length:"));
        assert!(out.contains("[E] External perimeters first:"));
        assert!(out.contains("[A] Fill gaps:"));
    }

    #[test]
    fn values_align_at_a_fixed_column() {
        let out = render(&sample_config(Expert));
        assert!(out.contains("    Layer height:                         0.2 mm\n"));
        assert!(out.contains("    First layer height:                   0.3 mm\n"));
        assert!(out.contains("    Perimeters:                           3 (minimum)\n"));
        assert!(out.contains("    Spiral vase:                          True\n"));
        assert!(out.contains("    [A] Ensure vertical shell thickness:  True\n"));
        assert!(out.contains("    [E] Extra perimeters if needed:       False\n"));
    }

    #[test]
    fn flag_values_render_as_booleans() {
        let out = render(&sample_config(Expert));
        assert!(out.contains("Thick bridges:"));
        assert!(out.contains("    [A] Thick bridges:                    True\n"));
        assert!(out.contains("    Generate support material:            False\n"));
        assert!(out.contains("    Auto generated supports:              True\n"));
    }

    #[test]
    fn bridging_detection_always_renders_its_placeholder() {
        let out = render(&sample_config(Advanced));
        assert!(out.contains("    [A] Detect bridging perimeters:       ????\n"));
    }

    #[test]
    fn missing_settings_render_blank_without_panicking() {
        let config = ReportConfig {
            file: PathBuf::from("empty.gcode"),
            view: Expert,
            settings: SettingsMap::new(),
        };
        let out = render(&config);
        // Labels still print; no value and no unit suffix follow them.
        assert!(out.contains("    Layer height:\n"));
        assert!(!out.contains("mm\n"));
    }

    #[test]
    fn sections_keep_their_order() {
        let out = render(&sample_config(Expert));
        let positions: Vec<usize> = [
            "Layers and perimeters:",
            "  Layer height:",
            "  Vertical shells:",
            "  Horizontal shells:",
            "  Quality (slower slicing) [Advanced+]:",
            "  Advanced\n",
            "  Fuzzy skin (experimental)\n",
            "Infill:",
            "Support material:",
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn end_to_end_simple_scenario() {
        let input = "; layer_height = 0.2\n; perimeters = 3\n; spiral_vase = 1\n";
        let config = ReportConfig {
            file: PathBuf::from("print.gcode"),
            view: Simple,
            settings: extract::scan(Cursor::new(input)).unwrap(),
        };
        let out = render(&config);
        assert!(out.contains("[Simple]"));
        assert!(out.contains("    Layer height:                         0.2 mm\n"));
        assert!(out.contains("    Perimeters:                           3 (minimum)\n"));
        assert!(out.contains("    Spiral vase:                          True\n"));
        assert!(!out.contains("[A]"));
        assert!(!out.contains("[E]"));
    }
}
