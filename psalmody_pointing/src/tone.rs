// Chant tone classification.
//
// The engine does not know the full catalogue of chant tones; consolidating
// legacy identifiers ("1 A 3", "6 C") happens upstream. It only needs to know
// which accent rule a tone uses, decided by testing the tone's normalized
// form (trimmed, lowercased, everything but ASCII digits and lowercase
// letters removed) against `PointingConfig::first_stanza_accent_tones`.

use crate::config::PointingConfig;

/// Where a tone places its melodic accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentRule {
    /// Next-to-last syllable of the first half-line, just before the pause.
    FirstStanza,
    /// Same place as the caesura, a fixed offset before the line's end.
    Cadence,
}

/// Normalize a tone identifier for set membership tests: `" Tone 6-C "`
/// becomes `"tone6c"`.
pub fn normalize_tone(tone: &str) -> String {
    tone.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        .collect()
}

/// Pick the accent rule for an optional tone. No tone always means `Cadence`.
pub fn classify_tone(tone: Option<&str>, config: &PointingConfig) -> AccentRule {
    match tone {
        Some(tone) if config.first_stanza_accent_tones.contains(&normalize_tone(tone)) => {
            AccentRule::FirstStanza
        }
        _ => AccentRule::Cadence,
    }
}
