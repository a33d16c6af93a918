// Article avoidance for the melodic accent.
//
// Stressing "the" or "a" sounds wrong when sung, so when the draft accent
// lands on an article and is not already on the line's last syllable, it
// moves forward one syllable. The shift happens once: if the next syllable
// is also an article it stays there, and the accent never moves backward.
// The caesura is never touched.

use crate::config::PointingConfig;
use crate::locate::word_index_for_syllable;
use crate::token::Token;

/// Return the accent syllable after article correction. `counts` is parallel
/// to `tokens` and sums to `total`.
pub fn avoid_article(
    target: usize,
    total: usize,
    tokens: &[Token],
    counts: &[usize],
    config: &PointingConfig,
) -> usize {
    let lands_on_article = word_index_for_syllable(target, counts)
        .and_then(|idx| tokens.get(idx))
        .is_some_and(|token| config.is_article(token.core));
    if lands_on_article && target < total {
        target + 1
    } else {
        target
    }
}
