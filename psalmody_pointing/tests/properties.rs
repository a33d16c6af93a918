// Property tests for the pointing engine.
//
// Generates psalm-like lines (words of letters and accented vowels wrapped in
// the punctuation the tokenizer recognizes, mixed with bare punctuation runs)
// with optional tone codes and checks the invariants every annotation must
// satisfy: syllable counts are additive and never zero for a real word,
// marks never alter the text they are inserted into, syllable targets stay
// within the line, and repeated calls agree.

use proptest::prelude::*;
use psalmody_pointing::syllable::count_syllables;
use psalmody_pointing::token::tokenize;
use psalmody_pointing::{PointingConfig, PointingEngine, strip_marks};

/// A word with optional leading and trailing punctuation, or a bare run of
/// sentence punctuation with no syllables.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[\"'(\\[\u{201C}]{0,2}[A-Za-z\u{E9}\u{FC}]{1,9}[.,;:!?)&\\]\u{201D}]{0,2}",
        1 => "[.,;:!?]{1,3}",
    ]
}

/// A line of 0-14 words separated by arbitrary whitespace runs.
fn line() -> impl Strategy<Value = String> {
    prop::collection::vec((word(), "[ \t]{1,3}"), 0..14).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, sep)| format!("{w}{sep}"))
            .collect::<String>()
    })
}

fn tone() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[1-8P]( ?[A-C])?")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_nonempty_word_has_syllables(word in "\\PC{1,12}") {
        prop_assert!(count_syllables(&word, &PointingConfig::default()) >= 1);
    }

    #[test]
    fn test_syllable_count_is_additive(line in line(), tone in tone()) {
        let engine = PointingEngine::default();
        let annotation = engine.annotate_line(&line, 0, tone.as_deref());
        let expected: usize = tokenize(&line, engine.config())
            .iter()
            .map(|t| count_syllables(t.core, engine.config()))
            .sum();
        prop_assert_eq!(annotation.syllable_count, expected);
    }

    #[test]
    fn test_marks_round_trip(line in line(), tone in tone()) {
        let engine = PointingEngine::default();
        let annotation = engine.annotate_line(&line, 0, tone.as_deref());
        let normalized: Vec<String> = tokenize(&line, engine.config())
            .iter()
            .map(|t| t.to_string())
            .collect();
        prop_assert_eq!(strip_marks(&annotation.annotated_line, engine.config()), normalized.join(" "));
    }

    #[test]
    fn test_targets_within_line(line in line(), tone in tone()) {
        let engine = PointingEngine::default();
        let annotation = engine.annotate_line(&line, 0, tone.as_deref());
        let total = annotation.syllable_count;
        if tokenize(&line, engine.config()).is_empty() {
            prop_assert_eq!(total, 0);
            prop_assert_eq!(annotation.annotated_line.as_str(), "");
        }
        if total == 0 {
            prop_assert!(annotation.caesura_syllable.is_none());
            prop_assert!(annotation.accent_syllable.is_none());
        } else {
            let caesura = annotation.caesura_syllable.unwrap();
            let accent = annotation.accent_syllable.unwrap();
            prop_assert!((1..=total).contains(&caesura));
            prop_assert!((1..=total).contains(&accent));
        }
    }

    #[test]
    fn test_marked_line_has_expected_marks(line in line(), tone in tone()) {
        let engine = PointingEngine::default();
        let annotation = engine.annotate_line(&line, 0, tone.as_deref());
        let marks = annotation.annotated_line.matches('/').count();
        if annotation.syllable_count > 0 {
            prop_assert_eq!(marks, 1);
            prop_assert!(annotation.annotated_line.contains('^'));
        } else {
            prop_assert_eq!(marks, 0);
        }
    }

    #[test]
    fn test_punctuation_only_line_is_unmarked(line in prop::collection::vec("[.,;:!?]{1,3}", 1..6)) {
        let line = line.join(" ");
        let engine = PointingEngine::default();
        let annotation = engine.annotate_line(&line, 0, Some("2"));
        prop_assert_eq!(annotation.syllable_count, 0);
        prop_assert!(annotation.caesura_syllable.is_none());
        prop_assert!(annotation.accent_syllable.is_none());
        prop_assert_eq!(annotation.annotated_line, line);
    }

    #[test]
    fn test_deterministic(line in line(), tone in tone(), index in 0usize..200) {
        let engine = PointingEngine::default();
        let first = engine.annotate_line(&line, index, tone.as_deref());
        let second = engine.annotate_line(&line, index, tone.as_deref());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.line_index, index);
        prop_assert_eq!(first.original_line, line);
    }
}
