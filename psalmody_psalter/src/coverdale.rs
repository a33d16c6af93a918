// Coverdale psalter import.
//
// Reads the plain-text Coverdale psalter, where each psalm opens with a
// header line `Psalm N. Latin incipit`, long psalms are divided by part
// markers (`I. Latin incipit`, `II. ...`), service labels ("Morning",
// "Evening") interrupt the text, and `*` marks the mid-verse break. Each
// part becomes one `Psalm`: its wrapped lines are joined, and every `*`
// starts a new line of `text`.
//
// Coverdale prints the accented syllable of each half-verse with an accented
// vowel ("práise"). `convert_coverdale_marks` turns those into the same `^`
// accent mark the pointing engine emits, and puts a `/` caesura mark on the
// first accent of every line after the first, giving an annotated text that
// needs no heuristic pointing.

use crate::error::PsalterError;
use crate::psalm::{Psalm, write_json};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

static PSALM_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Psalm\s+([0-9]+)\.\s*(.*)$").expect("psalm header pattern is valid"));
static PART_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([IVX]+)\.\s+(.+)$").expect("part marker pattern is valid"));
static SERVICE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(Morning|Evening|Prayer)\s*\.?\s*$").expect("service label pattern is valid")
});
static WRAPPED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\n\s*").expect("wrapped line pattern is valid"));
static VERSE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\*\s*").expect("verse break pattern is valid"));
static AMEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Amen\.?$").expect("amen pattern is valid"));

/// Lines collected for one part of a psalm before cleaning.
struct PartLines<'a> {
    latin: String,
    lines: Vec<&'a str>,
}

/// Parse the whole psalter text into psalms, in file order. Parts of
/// multi-part psalms get `part` numbers 1, 2, ... in order of appearance.
pub fn parse_coverdale(text: &str) -> Vec<Psalm> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut psalms = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(header) = PSALM_HEADER.captures(lines[i].trim()) else {
            i += 1;
            continue;
        };
        i += 1;
        let Ok(psalm_number) = header[1].parse::<u32>() else {
            warn!("skipping psalm with unreadable number {:?}", &header[1]);
            continue;
        };
        let header_latin = header[2].trim().to_string();

        let mut parts: Vec<PartLines> = Vec::new();
        while i < lines.len() {
            let line = lines[i];
            let trimmed = line.trim();
            if PSALM_HEADER.is_match(trimmed) {
                break;
            }
            i += 1;

            if let Some(marker) = PART_MARKER.captures(trimmed) {
                parts.push(PartLines {
                    latin: marker[2].trim().to_string(),
                    lines: Vec::new(),
                });
                continue;
            }
            if trimmed.is_empty() || SERVICE_LABEL.is_match(trimmed) {
                continue;
            }
            if parts.is_empty() {
                parts.push(PartLines {
                    latin: header_latin.clone(),
                    lines: Vec::new(),
                });
            }
            if let Some(part) = parts.last_mut() {
                part.lines.push(line);
            }
        }

        for part in parts {
            if part.lines.is_empty() {
                warn!("psalm {psalm_number}: skipping empty part {:?}", part.latin);
                continue;
            }
            let text = clean_psalm_text(&part.lines.join("\n"));
            psalms.push(Psalm {
                psalm_number,
                latin_name: Some(part.latin).filter(|l| !l.is_empty()),
                annotated_text: Some(convert_coverdale_text(&text)),
                text,
                ..Psalm::default()
            });
        }
    }

    number_parts(&mut psalms);
    psalms
}

/// Give every psalm that appears more than once a 1-based part number.
fn number_parts(psalms: &mut [Psalm]) {
    let mut totals: BTreeMap<u32, u32> = BTreeMap::new();
    for psalm in psalms.iter() {
        *totals.entry(psalm.psalm_number).or_default() += 1;
    }
    let mut seen: BTreeMap<u32, u32> = BTreeMap::new();
    for psalm in psalms.iter_mut() {
        if totals[&psalm.psalm_number] > 1 {
            let part = seen.entry(psalm.psalm_number).or_default();
            *part += 1;
            psalm.part = Some(*part);
        }
    }
}

/// Join wrapped lines, break at every `*`, and drop blank lines and lines
/// that are only "Amen".
pub fn clean_psalm_text(text: &str) -> String {
    let joined = WRAPPED_LINE.replace_all(text, " ");
    let split = VERSE_BREAK.replace_all(&joined, "\n");
    split
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !AMEN.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn base_vowel(c: char) -> Option<char> {
    match c {
        'á' | 'à' | 'â' | 'ä' => Some('a'),
        'é' | 'è' | 'ê' | 'ë' => Some('e'),
        'í' | 'ì' | 'î' | 'ï' => Some('i'),
        'ó' | 'ò' | 'ô' | 'ö' => Some('o'),
        'ú' | 'ù' | 'û' | 'ü' => Some('u'),
        _ => None,
    }
}

/// Replace Coverdale's accented vowels with `^` marks. On lines after the
/// first, the first accent also takes the caesura mark (`/^`).
pub fn convert_coverdale_marks(line: &str, line_index: usize) -> String {
    let mut marked = String::with_capacity(line.len() + 4);
    for c in line.chars() {
        match base_vowel(c) {
            Some(vowel) => {
                marked.push('^');
                marked.push(vowel);
            }
            None => marked.push(c),
        }
    }
    if line_index > 0 {
        marked = marked.replacen('^', "/^", 1);
    }
    marked
}

/// Apply `convert_coverdale_marks` to each line of a psalm text.
pub fn convert_coverdale_text(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| convert_coverdale_marks(line, idx))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `psalm_N.json`, or `psalm_N_P.json` for part P of a multi-part psalm.
pub fn coverdale_filename(psalm: &Psalm) -> String {
    match psalm.part {
        Some(part) => format!("psalm_{}_{}.json", psalm.psalm_number, part),
        None => format!("psalm_{}.json", psalm.psalm_number),
    }
}

/// Parse a Coverdale text file and write one JSON file per psalm part into
/// `out_dir`. Returns the paths written, in psalter order.
pub fn import_coverdale(input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, PsalterError> {
    let text = std::fs::read_to_string(input).map_err(|e| PsalterError::io(input, e))?;
    let psalms = parse_coverdale(&text);
    info!("parsed {} psalm(s) from {}", psalms.len(), input.display());

    std::fs::create_dir_all(out_dir).map_err(|e| PsalterError::io(out_dir, e))?;
    let mut written = Vec::with_capacity(psalms.len());
    for psalm in &psalms {
        let path = out_dir.join(coverdale_filename(psalm));
        write_json(&path, psalm)?;
        written.push(path);
    }
    Ok(written)
}
