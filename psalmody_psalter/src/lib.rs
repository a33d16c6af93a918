// Psalmody psalter: psalm data, tone tables, and batch chant pointing.
//
// Everything around the pointing engine (`psalmody_pointing`) that deals
// with whole psalms and files rather than single lines. No UI code; the
// `annotate` binary is a thin CLI over these modules.
//
// Architecture:
// - `psalm.rs`: `Psalm` / `PsalmCollection` JSON records, document detection,
//   parallel batch pointing, and `annotate_file`
// - `tones.rs`: legacy tone id consolidation and tone-chart display names
// - `recommended.rs`: psalm-to-tone table and `apply_recommended_tones`
// - `coverdale.rs`: plain-text Coverdale psalter import with accent marks
// - `error.rs`: `PsalterError`
// - `main.rs`: the `annotate` CLI
//
// Library code logs through the `log` facade and never prints; the binary
// decides where log records go.

pub mod coverdale;
pub mod error;
pub mod psalm;
pub mod recommended;
pub mod tones;

pub use error::PsalterError;
pub use psalm::{
    AnnotateOptions, Psalm, PsalmCollection, PsalterDocument, annotate_collection, annotate_file,
    annotate_psalm,
};
