// Caesura and accent targeting.
//
// Both marks are chosen first as a 1-based syllable number within the line,
// then mapped to the word that contains that syllable.
//
// - Caesura: `caesura_offset` syllables before the end of the line, floored
//   at 1. Independent of tone.
// - Accent: for `AccentRule::FirstStanza` tones with a first half-line of at
//   least two syllables, the next-to-last syllable of that half-line;
//   otherwise the caesura's syllable.
//
// The article correction that may nudge the accent lives in `article.rs`.

use crate::config::PointingConfig;
use crate::tone::AccentRule;

/// Syllable number of the caesura for a line of `total` syllables.
pub fn caesura_target(total: usize, config: &PointingConfig) -> usize {
    total.saturating_sub(config.caesura_offset).max(1)
}

/// Syllable number of the melodic accent, before article correction.
pub fn accent_target(
    rule: AccentRule,
    first_stanza: usize,
    total: usize,
    config: &PointingConfig,
) -> usize {
    match rule {
        AccentRule::FirstStanza if first_stanza >= 2 => (first_stanza - 1).max(1),
        _ => caesura_target(total, config),
    }
}

/// Index of the word holding syllable `target`: the first word whose running
/// syllable total reaches the target. A target past the end of the line maps
/// to the last word; a line with no words maps to `None`.
pub fn word_index_for_syllable(target: usize, counts: &[usize]) -> Option<usize> {
    let mut acc = 0;
    for (i, &count) in counts.iter().enumerate() {
        acc += count;
        if acc >= target {
            return Some(i);
        }
    }
    counts.len().checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesura_target() {
        let config = PointingConfig::default();
        assert_eq!(caesura_target(9, &config), 5);
        assert_eq!(caesura_target(5, &config), 1);
        assert_eq!(caesura_target(4, &config), 1);
        assert_eq!(caesura_target(1, &config), 1);
        assert_eq!(caesura_target(0, &config), 1);
    }

    #[test]
    fn test_caesura_offset_is_configurable() {
        let config = PointingConfig {
            caesura_offset: 2,
            ..PointingConfig::default()
        };
        assert_eq!(caesura_target(9, &config), 7);
    }

    #[test]
    fn test_accent_first_stanza() {
        let config = PointingConfig::default();
        assert_eq!(accent_target(AccentRule::FirstStanza, 3, 6, &config), 2);
        assert_eq!(accent_target(AccentRule::FirstStanza, 2, 6, &config), 1);
    }

    #[test]
    fn test_accent_short_first_stanza_falls_back() {
        let config = PointingConfig::default();
        assert_eq!(accent_target(AccentRule::FirstStanza, 1, 10, &config), 6);
        assert_eq!(accent_target(AccentRule::FirstStanza, 0, 10, &config), 6);
    }

    #[test]
    fn test_accent_cadence_matches_caesura() {
        let config = PointingConfig::default();
        for total in 0..20 {
            assert_eq!(
                accent_target(AccentRule::Cadence, 5, total, &config),
                caesura_target(total, &config)
            );
        }
    }

    #[test]
    fn test_word_index_for_syllable() {
        // O come let us sing unto the Lord
        let counts = [1, 1, 1, 1, 1, 2, 1, 1];
        assert_eq!(word_index_for_syllable(1, &counts), Some(0));
        assert_eq!(word_index_for_syllable(5, &counts), Some(4));
        assert_eq!(word_index_for_syllable(6, &counts), Some(5));
        assert_eq!(word_index_for_syllable(7, &counts), Some(5));
        assert_eq!(word_index_for_syllable(8, &counts), Some(6));
    }

    #[test]
    fn test_word_index_past_end_is_last_word() {
        assert_eq!(word_index_for_syllable(50, &[2, 3]), Some(1));
    }

    #[test]
    fn test_word_index_skips_silent_words() {
        // A punctuation-only word contributes no syllables and is passed over.
        assert_eq!(word_index_for_syllable(1, &[0, 1, 2]), Some(1));
    }

    #[test]
    fn test_word_index_no_words() {
        assert_eq!(word_index_for_syllable(1, &[]), None);
    }
}
