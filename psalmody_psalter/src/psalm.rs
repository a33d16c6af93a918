// Psalm records, collections, and batch pointing.
//
// Psalm text lives in JSON files of two shapes: a collection
// (`{"version", "name", "description", "psalms": [...]}`) or a single psalm
// (`{"psalm_number", "text", ...}`). `PsalterDocument` recognizes either.
// Fields this crate does not know about are kept in `extra` and written back
// unchanged, so annotating a file never drops data.
//
// Annotating a psalm splits its `text` into lines, points each with the
// engine (line numbers from 0, one shared tone), and stores the joined
// `annotated_text` plus the per-line `chant_annotations`. Psalms in a
// collection are independent, so they are pointed in parallel with rayon;
// output order matches input order.
//
// See also: `recommended.rs` for filling `recommended_tone`, `main.rs` for
// the CLI that drives `annotate_file`.

use crate::error::PsalterError;
use crate::recommended::apply_recommended_tones;
use log::{debug, info};
use psalmody_pointing::{LineAnnotation, PointingEngine, TextAnnotation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Description given to annotated collections that had none.
pub const DEFAULT_COLLECTION_DESCRIPTION: &str = "Annotated psalm collection";

/// One psalm, or one part of a multi-part psalm.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Psalm {
    pub psalm_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin_name: Option<String>,
    /// Plain text, one half-verse per line.
    pub text: String,
    /// `text` with pointing marks, one line per line of `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_text: Option<String>,
    /// 1-based part number for psalms split across several files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<u32>,
    /// Consolidated tone suggested by the psalm tone table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chant_annotations: Option<Vec<LineAnnotation>>,
    /// Tone the annotations were computed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chant_tone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named set of psalms, e.g. one psalter translation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PsalmCollection {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub psalms: Vec<Psalm>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contents of a psalm JSON file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PsalterDocument {
    Collection(PsalmCollection),
    Psalm(Psalm),
}

/// Settings shared by every psalm in one annotation run.
#[derive(Debug, Clone, Default)]
pub struct AnnotateOptions {
    /// Tone to point for. `None` (or empty) uses the tone-independent rule.
    pub tone: Option<String>,
    /// Fill missing `recommended_tone` fields from the psalm tone table.
    pub recommend_tones: bool,
}

impl AnnotateOptions {
    fn tone(&self) -> Option<&str> {
        self.tone.as_deref().filter(|t| !t.is_empty())
    }
}

impl PsalterDocument {
    /// Parse JSON text. `path` only labels errors.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, PsalterError> {
        let value: Value = serde_json::from_str(json).map_err(|e| PsalterError::json(path, e))?;

        if value.get("psalms").is_some_and(Value::is_array) {
            return serde_json::from_value(value)
                .map(PsalterDocument::Collection)
                .map_err(|e| PsalterError::json(path, e));
        }

        let is_psalm = value.get("psalm_number").is_some_and(Value::is_number)
            && value.get("text").is_some_and(Value::is_string);
        if is_psalm {
            return serde_json::from_value(value)
                .map(PsalterDocument::Psalm)
                .map_err(|e| PsalterError::json(path, e));
        }

        Err(PsalterError::UnrecognizedFormat {
            path: path.to_path_buf(),
        })
    }

    pub fn read(path: &Path) -> Result<Self, PsalterError> {
        let json = std::fs::read_to_string(path).map_err(|e| PsalterError::io(path, e))?;
        Self::from_json(&json, path)
    }

    pub fn psalms(&self) -> &[Psalm] {
        match self {
            PsalterDocument::Collection(collection) => &collection.psalms,
            PsalterDocument::Psalm(psalm) => std::slice::from_ref(psalm),
        }
    }

    pub fn psalms_mut(&mut self) -> &mut [Psalm] {
        match self {
            PsalterDocument::Collection(collection) => &mut collection.psalms,
            PsalterDocument::Psalm(psalm) => std::slice::from_mut(psalm),
        }
    }
}

/// Point every line of a psalm with a shared tone.
pub fn annotate_psalm(engine: &PointingEngine, psalm: Psalm, tone: Option<&str>) -> Psalm {
    let tone = tone.filter(|t| !t.is_empty());
    let TextAnnotation {
        annotated_text,
        lines,
    } = engine.annotate_text(&psalm.text, tone);
    debug!(
        "pointed psalm {}{} ({} lines)",
        psalm.psalm_number,
        psalm.part.map(|p| format!(" part {p}")).unwrap_or_default(),
        lines.len()
    );
    Psalm {
        annotated_text: Some(annotated_text),
        chant_annotations: Some(lines),
        chant_tone: tone.map(str::to_string).or(psalm.chant_tone),
        ..psalm
    }
}

/// Point every psalm in a collection, in parallel.
pub fn annotate_collection(
    engine: &PointingEngine,
    collection: PsalmCollection,
    tone: Option<&str>,
) -> PsalmCollection {
    let psalms: Vec<Psalm> = collection
        .psalms
        .into_par_iter()
        .map(|psalm| annotate_psalm(engine, psalm, tone))
        .collect();
    let description = collection
        .description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_COLLECTION_DESCRIPTION.to_string());
    PsalmCollection {
        description: Some(description),
        psalms,
        ..collection
    }
}

/// Apply `options` to a parsed document.
pub fn annotate_document(
    engine: &PointingEngine,
    mut document: PsalterDocument,
    options: &AnnotateOptions,
) -> PsalterDocument {
    if options.recommend_tones {
        let updated = apply_recommended_tones(document.psalms_mut());
        info!("set recommended tone on {updated} psalm(s)");
    }
    match document {
        PsalterDocument::Collection(collection) => {
            PsalterDocument::Collection(annotate_collection(engine, collection, options.tone()))
        }
        PsalterDocument::Psalm(psalm) => {
            PsalterDocument::Psalm(annotate_psalm(engine, psalm, options.tone()))
        }
    }
}

/// Output name for an annotated copy of `input`: `psalms.json` becomes
/// `psalms.annotated.json`.
pub fn annotated_filename(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = if name.to_ascii_lowercase().ends_with(".json") {
        &name[..name.len() - ".json".len()]
    } else {
        name.as_str()
    };
    format!("{stem}.annotated.json")
}

/// Read a psalm file, point it, and write the result into `out_dir`.
/// Returns the path written.
pub fn annotate_file(
    engine: &PointingEngine,
    input: &Path,
    out_dir: &Path,
    options: &AnnotateOptions,
) -> Result<PathBuf, PsalterError> {
    let document = PsalterDocument::read(input)?;
    info!(
        "read {} psalm(s) from {}",
        document.psalms().len(),
        input.display()
    );

    std::fs::create_dir_all(out_dir).map_err(|e| PsalterError::io(out_dir, e))?;
    let annotated = annotate_document(engine, document, options);

    let out_path = out_dir.join(annotated_filename(input));
    write_json(&out_path, &annotated)?;
    info!("wrote {}", out_path.display());
    Ok(out_path)
}

/// Write `value` as pretty-printed JSON (two-space indent).
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PsalterError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| PsalterError::json(path, e))?;
    std::fs::write(path, json).map_err(|e| PsalterError::io(path, e))
}
