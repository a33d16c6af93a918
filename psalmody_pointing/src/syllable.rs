// Orthographic syllable estimation for a single word core.
//
// Counts maximal runs of vowel letters in the lowercased word, then applies
// the silent-e correction: a word ending in `e` with more than one vowel
// group loses one syllable unless it ends in `ee` or `le` ("come" = 1,
// "agree" = 2, "temple" = 2). A word with no vowel letters at all counts as
// one syllable. This is a heuristic, not a dictionary, and irregular words
// are expected to miscount.

use crate::config::PointingConfig;

/// Estimated syllable count of `word`. Zero only for the empty string.
pub fn count_syllables(word: &str, config: &PointingConfig) -> usize {
    if word.is_empty() {
        return 0;
    }

    let clean = word.to_lowercase();
    let mut groups = 0;
    let mut in_group = false;
    for c in clean.chars() {
        let vowel = config.is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    let mut count = if groups == 0 { 1 } else { groups };
    if count > 1 && clean.ends_with('e') && !clean.ends_with("ee") && !clean.ends_with("le") {
        count -= 1;
    }
    count.max(1)
}
