// First half-line (stanza) segmentation.
//
// A chant verse divides at its first internal comma or semicolon. The first
// stanza runs from the start of the line through the first token whose core
// or trailing punctuation contains a break character, inclusive of that
// token's syllables. A line with no break is all first stanza.

use crate::config::PointingConfig;
use crate::token::Token;

/// Syllables in the first half-line. `counts` is parallel to `tokens`.
pub fn first_stanza_syllables(tokens: &[Token], counts: &[usize], config: &PointingConfig) -> usize {
    let mut total = 0;
    for (token, &count) in tokens.iter().zip(counts) {
        total += count;
        if config.has_stanza_break(token.core) || config.has_stanza_break(token.trailing) {
            break;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::count_syllables;
    use crate::token::tokenize;

    fn stanza(line: &str) -> usize {
        let config = PointingConfig::default();
        let tokens = tokenize(line, &config);
        let counts: Vec<usize> = tokens.iter().map(|t| count_syllables(t.core, &config)).collect();
        first_stanza_syllables(&tokens, &counts, &config)
    }

    #[test]
    fn test_comma_ends_stanza() {
        assert_eq!(stanza("Praise the Lord, O my soul"), 3);
    }

    #[test]
    fn test_semicolon_ends_stanza() {
        assert_eq!(stanza("The Lord is my shepherd; I shall not want"), 6);
    }

    #[test]
    fn test_first_break_wins() {
        assert_eq!(stanza("Hear, O Lord; and answer"), 1);
    }

    #[test]
    fn test_no_break_is_whole_line() {
        assert_eq!(stanza("O come let us sing unto the Lord"), 9);
    }

    #[test]
    fn test_period_and_colon_do_not_break() {
        assert_eq!(stanza("Selah. Amen: so be it"), 7);
    }

    #[test]
    fn test_break_inside_core() {
        // A comma the tokenizer left in the core still ends the stanza.
        assert_eq!(stanza("one,two three"), 3);
    }

    #[test]
    fn test_empty() {
        assert_eq!(stanza(""), 0);
    }
}
