// Output records of the pointing engine.
//
// `LineAnnotation` is the per-line result; `TextAnnotation` bundles the
// results for a multi-line text with the joined annotated text. The JSON
// field names match the `chant_annotations` arrays stored in psalm files, so
// records round-trip through existing data unchanged.

use serde::{Deserialize, Serialize};

/// The pointing of one line of a psalm.
///
/// When `syllable_count` is nonzero both syllable numbers are present and lie
/// in `1..=syllable_count`. Otherwise both are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAnnotation {
    /// 0-based position of the line within its text.
    #[serde(rename = "lineIndex")]
    pub line_index: usize,
    /// The input line, verbatim.
    pub original_line: String,
    /// The line with `/`, `^`, or `/^` inserted before the marked words.
    pub annotated_line: String,
    /// Estimated syllables in the whole line.
    #[serde(rename = "syllables")]
    pub syllable_count: usize,
    /// 1-based syllable number of the caesura.
    #[serde(rename = "caesuraIndex", default, skip_serializing_if = "Option::is_none")]
    pub caesura_syllable: Option<usize>,
    /// 1-based syllable number of the melodic accent.
    #[serde(
        rename = "primaryAccentSyllable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accent_syllable: Option<usize>,
}

/// The pointing of a multi-line text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextAnnotation {
    /// Every line's `annotated_line`, joined with `\n`.
    pub annotated_text: String,
    /// One record per input line, in order.
    pub lines: Vec<LineAnnotation>,
}
