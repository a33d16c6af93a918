// Tokenizer: splits a verse line into words with their punctuation peeled off.
//
// A line is split on runs of whitespace (a stray byte-order mark counts). Each word then loses a run of
// leading punctuation (quotation marks, opening brackets) and, from what is
// left, a run of trailing punctuation (sentence marks, quotation marks,
// closing brackets, `&`). The middle is the word's core, which is what the
// syllable counter and article check see. Leading punctuation is taken first,
// so a word made only of punctuation lands entirely in `leading` and is never
// duplicated into `trailing`.
//
// Tokens borrow from the input line. Joining `leading + core + trailing` for
// every token with single spaces reproduces the line with whitespace runs
// collapsed.

use crate::config::PointingConfig;
use std::fmt;

/// One whitespace-delimited word of a line. Empty fields mean "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.leading, self.core, self.trailing)
    }
}

/// Split a line into tokens. Never fails; an empty or all-whitespace line
/// yields no tokens.
pub fn tokenize<'a>(line: &'a str, config: &PointingConfig) -> Vec<Token<'a>> {
    line.split(is_separator)
        .filter(|word| !word.is_empty())
        .map(|word| split_word(word, config))
        .collect()
}

/// Whitespace, plus the byte-order mark that editors leave at the start of
/// pasted text.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn split_word<'a>(word: &'a str, config: &PointingConfig) -> Token<'a> {
    let rest = word.trim_start_matches(|c| config.is_leading_punctuation(c));
    let leading = &word[..word.len() - rest.len()];
    let core = rest.trim_end_matches(|c| config.is_trailing_punctuation(c));
    let trailing = &rest[core.len()..];
    Token {
        leading,
        core,
        trailing,
    }
}
