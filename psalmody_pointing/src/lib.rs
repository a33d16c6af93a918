// Psalmody chant pointing engine.
//
// Points a line of psalm text for singing to a chant tone: decides where the
// singer pauses mid-line (the caesura, marked `/`) and where the tone's
// melodic accent falls (marked `^`, or `/^` when both land on one word).
// The algorithm is an orthographic heuristic over English text, not a
// phonetic or musical model.
//
// Architecture (pipeline order):
// - `token.rs`: split a line into words with leading/trailing punctuation
// - `syllable.rs`: vowel-group syllable estimate per word core
// - `tone.rs`: normalize a tone id and pick its `AccentRule`
// - `stanza.rs`: syllables in the first half-line (up to the first `,`/`;`)
// - `locate.rs`: caesura/accent syllable targets and syllable-to-word mapping
// - `article.rs`: nudge the accent off "a"/"an"/"the"
// - `render.rs`: reassemble the line with marks (and strip them again)
// - `annotation.rs`: `LineAnnotation` / `TextAnnotation` output records
// - `config.rs`: `PointingConfig`, every constant the pipeline consults
// - `lib.rs` (this file): `PointingEngine`, the per-line and batch entry points
//
// The engine is pure: no I/O, no logging, no shared mutable state. It owns an
// immutable `PointingConfig`, so one engine can be shared across threads and
// any number of lines annotated in parallel.

pub mod annotation;
pub mod article;
pub mod config;
pub mod locate;
pub mod render;
pub mod stanza;
pub mod syllable;
pub mod token;
pub mod tone;

pub use annotation::{LineAnnotation, TextAnnotation};
pub use config::{ConfigError, PointingConfig};
pub use render::{Mark, strip_marks};
pub use tone::AccentRule;

use article::avoid_article;
use locate::{accent_target, caesura_target, word_index_for_syllable};
use render::render_line;
use stanza::first_stanza_syllables;
use syllable::count_syllables;
use token::tokenize;
use tone::classify_tone;

/// Stateless chant pointer configured by a `PointingConfig`.
#[derive(Debug, Clone, Default)]
pub struct PointingEngine {
    config: PointingConfig,
}

impl PointingEngine {
    pub fn new(config: PointingConfig) -> Self {
        PointingEngine { config }
    }

    pub fn config(&self) -> &PointingConfig {
        &self.config
    }

    /// Point a single line. Total over all inputs: an empty line, or one with
    /// no syllables at all, comes back unmarked with no syllable targets.
    pub fn annotate_line(&self, line: &str, line_index: usize, tone: Option<&str>) -> LineAnnotation {
        let config = &self.config;
        let tokens = tokenize(line, config);
        let counts: Vec<usize> = tokens
            .iter()
            .map(|t| count_syllables(t.core, config))
            .collect();
        let total: usize = counts.iter().sum();

        if total == 0 {
            return LineAnnotation {
                line_index,
                original_line: line.to_string(),
                annotated_line: render_line(&tokens, None, None),
                syllable_count: 0,
                caesura_syllable: None,
                accent_syllable: None,
            };
        }

        let caesura = caesura_target(total, config);
        let caesura_word = word_index_for_syllable(caesura, &counts);

        let rule = classify_tone(tone, config);
        let first_stanza = first_stanza_syllables(&tokens, &counts, config);
        let draft_accent = accent_target(rule, first_stanza, total, config);
        let accent = avoid_article(draft_accent, total, &tokens, &counts, config);
        let accent_word = word_index_for_syllable(accent, &counts);

        LineAnnotation {
            line_index,
            original_line: line.to_string(),
            annotated_line: render_line(&tokens, caesura_word, accent_word),
            syllable_count: total,
            caesura_syllable: Some(caesura),
            accent_syllable: Some(accent),
        }
    }

    /// Point every line of a multi-line text with a shared tone. Lines are
    /// split on `\n` (a trailing `\r` is dropped) and numbered from 0; an
    /// empty text is one empty line.
    pub fn annotate_text(&self, text: &str, tone: Option<&str>) -> TextAnnotation {
        let lines: Vec<LineAnnotation> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .map(|(idx, line)| self.annotate_line(line, idx, tone))
            .collect();
        let annotated_text = lines
            .iter()
            .map(|l| l.annotated_line.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        TextAnnotation {
            annotated_text,
            lines,
        }
    }
}
