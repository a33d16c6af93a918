// Chant tone catalogue: legacy id consolidation and tone-chart naming.
//
// Psalm data and tone charts use the St. Dunstan tone numbering, which
// distinguishes dozens of ending variants ("1 A 1" … "1 A 13", "2 PA",
// "8 5"). Pointing only needs the tone family, so every variant is mapped
// to one of the consolidated tones (1A, 1B, 2, 3A, 4, 5, 6A, 6B, 6C, 7, 8,
// P). Unknown ids pass through unchanged.
//
// The chart section turns tone-chart SVG filenames, which follow several
// naming schemes ("1 A 1.svg", "3_1.svg", "4.1.svg", "6_A.svg"), into
// display names like "Tone 1A, Variation 1".

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// A legacy tone id and the consolidated tone it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneMapping {
    pub original: &'static str,
    pub consolidated: &'static str,
}

const fn map(original: &'static str, consolidated: &'static str) -> ToneMapping {
    ToneMapping {
        original,
        consolidated,
    }
}

pub const TONE_CONSOLIDATION: &[ToneMapping] = &[
    map("1 A 1", "1A"),
    map("1 A 2", "1A"),
    map("1 A 3", "1A"),
    map("1 A 4", "1A"),
    map("1 A 5", "1A"),
    map("1 A 6", "1A"),
    map("1 A 7", "1A"),
    map("1 A 8", "1A"),
    map("1 A 9", "1A"),
    map("1 A 10", "1A"),
    map("1 A 11", "1A"),
    map("1 A 12", "1A"),
    map("1 A 13", "1A"),
    map("1 A B", "1A"),
    map("1 B 1", "1B"),
    map("1 B 2", "1B"),
    map("1 B 3", "1B"),
    map("1 B 4", "1B"),
    map("1 B 5", "1B"),
    map("1 B 6", "1B"),
    map("1 B 7", "1B"),
    map("1 B 8", "1B"),
    map("1 B 9", "1B"),
    map("1 B 10", "1B"),
    map("1 B 11", "1B"),
    map("1 B 12", "1B"),
    map("1 B 13", "1B"),
    map("1 2", "1B"),
    map("2 1", "2"),
    map("2 2", "2"),
    map("2 PA", "2"),
    map("2 A 5", "2"),
    map("3 A 1", "3A"),
    map("3 A 2", "3A"),
    map("3 A 4", "3A"),
    map("3 A 5", "3A"),
    map("3 A 6", "3A"),
    map("4 1", "4"),
    map("4 4", "4"),
    map("4 5", "4"),
    map("4 6", "4"),
    map("4 7", "4"),
    map("4 8", "4"),
    map("4 9", "4"),
    map("4 10", "4"),
    map("5 1", "5"),
    map("5 2", "5"),
    map("5 3", "5"),
    map("6 A", "6A"),
    map("6 B", "6B"),
    map("6 C", "6C"),
    map("7 1", "7"),
    map("7 2", "7"),
    map("7 3", "7"),
    map("7 4", "7"),
    map("7 5", "7"),
    map("7 6", "7"),
    map("7 7", "7"),
    map("8 1", "8"),
    map("8 2", "8"),
    map("8 3", "8"),
    map("8 4", "8"),
    map("8 5", "8"),
    map("8 6", "8"),
    map("PA", "P"),
];

/// Consolidated tone for a legacy id, or the id itself when unknown.
pub fn consolidate_tone(tone: &str) -> &str {
    TONE_CONSOLIDATION
        .iter()
        .find(|m| m.original == tone)
        .map_or(tone, |m| m.consolidated)
}

/// All consolidated tones, sorted.
pub fn unique_tones() -> Vec<&'static str> {
    TONE_CONSOLIDATION
        .iter()
        .map(|m| m.consolidated)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// "Tone 6A" for "6A".
pub fn tone_display_name(consolidated: &str) -> String {
    format!("Tone {consolidated}")
}

// ---------------------------------------------------------------------------
// Tone charts
// ---------------------------------------------------------------------------

/// Directory the tone-chart SVGs are served from.
pub const TONE_CHART_DIR: &str = "/assets/psalms/tones/sarum";

/// Every tone-chart SVG shipped with the app.
pub const TONE_CHART_FILES: &[&str] = &[
    "1 A 1.svg", "1 A 2.svg", "1 A 3.svg", "1 A 4.svg", "1 A 5.svg", "1 A 6.svg", "1 A 7.svg",
    "1 A 8.svg", "1 A 9.svg", "1 A 10.svg", "1 A 11.svg", "1 A 12.svg", "1 A 13.svg",
    "1 B 1.svg", "1 B 2.svg", "1 B 3.svg", "1 B 4.svg", "1 B 5.svg", "1 B 6.svg", "1 B 7.svg",
    "1 B 8.svg", "1 B 9.svg", "1 B 10.svg", "1 B 11.svg", "1 B 12.svg", "1 B 13.svg",
    "2 1.svg", "2 2.svg", "3_1.svg", "4.1.svg", "4_1.svg", "4_8.svg", "4_9.svg", "5_1.svg",
    "5_2.svg", "5_3.svg", "6_A.svg", "6_B.svg", "6_C.svg", "7_1.svg", "7_3.svg", "7_4.svg",
    "7_4 (1).svg", "7_5.svg", "7_6.svg", "7_7.svg", "8_1.svg", "8_2.svg", "8_3.svg", "8_4.svg",
    "8_5.svg", "P_1.svg", "P_2.svg",
];

/// Filename patterns and the display name each expands to, tried in order.
static CHART_NAME_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"^([0-9]+)\s+([A-Z])\s+([0-9]+)$", "Tone ${1}${2}, Variation ${3}"),
        (r"^([0-9]+)\s+([0-9]+)$", "Tone ${1}, Variation ${2}"),
        (r"^([0-9]+)_([0-9]+)$", "Tone ${1}, Variation ${2}"),
        (r"^([0-9]+)\.([0-9]+)$", "Tone ${1}, Variation ${2}"),
        (r"^([0-9]+)_([A-Z])$", "Tone ${1}${2}"),
        (r"^([0-9]+)_([0-9]+)\s+\(([0-9]+)\)$", "Tone ${1}, Variation ${2} (${3})"),
        (r"^([A-Z])_([0-9]+)$", "Tone ${1}, Variation ${2}"),
    ]
    .into_iter()
    .map(|(pattern, template)| {
        (
            Regex::new(pattern).expect("tone chart pattern is valid"),
            template,
        )
    })
    .collect()
});

/// Display name for a tone-chart file. Names that fit no known scheme come
/// back without their `.svg` extension.
pub fn chart_display_name(filename: &str) -> String {
    let name = filename.strip_suffix(".svg").unwrap_or(filename);
    for (pattern, template) in CHART_NAME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(name) {
            let mut display = String::new();
            caps.expand(template, &mut display);
            return display;
        }
    }
    name.to_string()
}

/// Served path of a tone-chart file.
pub fn chart_path(filename: &str) -> String {
    format!("{TONE_CHART_DIR}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consolidate_known_ids() {
        assert_eq!(consolidate_tone("1 A 7"), "1A");
        assert_eq!(consolidate_tone("1 A B"), "1A");
        assert_eq!(consolidate_tone("1 2"), "1B");
        assert_eq!(consolidate_tone("2 PA"), "2");
        assert_eq!(consolidate_tone("6 C"), "6C");
        assert_eq!(consolidate_tone("PA"), "P");
    }

    #[test]
    fn test_chart_names_need_ascii_digits() {
        assert_eq!(chart_display_name("\u{663}_1.svg"), "\u{663}_1");
        assert_eq!(chart_display_name("7_\u{664}.svg"), "7_\u{664}");
    }

    #[test]
    fn test_consolidate_unknown_passes_through() {
        assert_eq!(consolidate_tone("9 Z"), "9 Z");
        assert_eq!(consolidate_tone("1A"), "1A");
        assert_eq!(consolidate_tone(""), "");
    }

    #[test]
    fn test_unique_tones() {
        assert_eq!(
            unique_tones(),
            vec!["1A", "1B", "2", "3A", "4", "5", "6A", "6B", "6C", "7", "8", "P"]
        );
    }

    #[test]
    fn test_original_ids_are_unique() {
        let originals: BTreeSet<_> = TONE_CONSOLIDATION.iter().map(|m| m.original).collect();
        assert_eq!(originals.len(), TONE_CONSOLIDATION.len());
    }

    #[test]
    fn test_tone_display_name() {
        assert_eq!(tone_display_name("6A"), "Tone 6A");
    }

    #[test]
    fn test_chart_display_names() {
        assert_eq!(chart_display_name("1 A 1.svg"), "Tone 1A, Variation 1");
        assert_eq!(chart_display_name("1 B 12.svg"), "Tone 1B, Variation 12");
        assert_eq!(chart_display_name("2 1.svg"), "Tone 2, Variation 1");
        assert_eq!(chart_display_name("3_1.svg"), "Tone 3, Variation 1");
        assert_eq!(chart_display_name("4.1.svg"), "Tone 4, Variation 1");
        assert_eq!(chart_display_name("6_A.svg"), "Tone 6A");
        assert_eq!(chart_display_name("7_4 (1).svg"), "Tone 7, Variation 4 (1)");
        assert_eq!(chart_display_name("P_2.svg"), "Tone P, Variation 2");
        assert_eq!(chart_display_name("odd-name.svg"), "odd-name");
    }

    #[test]
    fn test_every_chart_file_has_a_tone_name() {
        for file in TONE_CHART_FILES {
            assert!(
                chart_display_name(file).starts_with("Tone "),
                "{file} did not match a naming scheme"
            );
        }
    }

    #[test]
    fn test_chart_path() {
        assert_eq!(chart_path("6_A.svg"), "/assets/psalms/tones/sarum/6_A.svg");
    }
}
