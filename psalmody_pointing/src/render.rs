// Line rendering: reassembles tokens with pointing marks.
//
// A marked word gets its mark between its leading punctuation and its core:
// `/` for the caesura, `^` for the accent, `/^` when both fall on the same
// word. Tokens are rejoined with single spaces.
//
// `strip_marks` is the inverse, recovering the tokenized line from an
// annotated one. It assumes no original word core began with `/` or `^`.

use crate::config::PointingConfig;
use crate::token::{Token, tokenize};

/// A pointing mark placed before a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Caesura,
    Accent,
    CaesuraAccent,
}

impl Mark {
    /// The mark for a word that carries the caesura and/or the accent.
    pub fn for_word(caesura: bool, accent: bool) -> Option<Mark> {
        match (caesura, accent) {
            (true, true) => Some(Mark::CaesuraAccent),
            (true, false) => Some(Mark::Caesura),
            (false, true) => Some(Mark::Accent),
            (false, false) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Caesura => "/",
            Mark::Accent => "^",
            Mark::CaesuraAccent => "/^",
        }
    }
}

/// Render tokens into an annotated line, marking the words at the given
/// indices.
pub fn render_line(tokens: &[Token], caesura_word: Option<usize>, accent_word: Option<usize>) -> String {
    let words: Vec<String> = tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            let mark = Mark::for_word(caesura_word == Some(idx), accent_word == Some(idx))
                .map_or("", Mark::as_str);
            format!("{}{}{}{}", token.leading, mark, token.core, token.trailing)
        })
        .collect();
    words.join(" ")
}

/// Remove pointing marks from an annotated line, giving the original line
/// with whitespace normalized.
///
/// Only meaningful on output of `render_line`: one leading `/^`, `/`, or `^`
/// is removed from every word core, so a core that began with one of those
/// characters before pointing loses it too.
pub fn strip_marks(annotated: &str, config: &PointingConfig) -> String {
    let words: Vec<String> = tokenize(annotated, config)
        .into_iter()
        .map(|token| {
            let core = [Mark::CaesuraAccent, Mark::Caesura, Mark::Accent]
                .iter()
                .find_map(|mark| token.core.strip_prefix(mark.as_str()))
                .unwrap_or(token.core);
            Token { core, ..token }.to_string()
        })
        .collect();
    words.join(" ")
}
