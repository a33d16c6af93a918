// Recommended chant tones from the psalm tone table.
//
// Each psalm (or psalm part) has a conventional tone. Keys are the psalm
// number, with a part suffix for psalms the table splits ("18 1", "18 2")
// and Hebrew-letter section names for Psalm 119 ("119 Aleph"). Values are
// consolidated tone ids as produced by `tones::consolidate_tone`.
//
// `apply_recommended_tones` fills `recommended_tone` on psalms that have
// none, leaving explicit choices alone.

use crate::psalm::Psalm;

/// The 22 sections of Psalm 119, in order, as named in the tone table.
pub const PSALM_119_SECTIONS: [&str; 22] = [
    "Aleph", "Beth", "Gimel", "Daleth", "He", "Waw", "Zayin", "Heth", "Teth", "Yodh", "Kaph",
    "Lamedh", "Mem", "Nun", "Samekh", "Ayin", "Pe", "Sadhe", "Qoph", "Resh", "Shin", "Taw",
];

/// Psalm tone table: (psalm key, consolidated tone).
pub const RECOMMENDED_TONES: &[(&str, &str)] = &[
    ("1", "1B"),
    ("2", "3A"),
    ("3", "2"),
    ("4", "8"),
    ("5", "1A"),
    ("6", "8"),
    ("7", "1A"),
    ("8", "5"),
    ("9", "6C"),
    ("10", "8"),
    ("11", "5"),
    ("12", "4"),
    ("13", "3A"),
    ("14", "7"),
    ("15", "3A"),
    ("16", "8"),
    ("17", "7"),
    ("18 1", "1B"),
    ("18 2", "2"),
    ("19", "4"),
    ("20", "3A"),
    ("21", "8"),
    ("22", "2"),
    ("23", "6A"),
    ("24", "7"),
    ("25", "1A"),
    ("26", "6B"),
    ("27", "7"),
    ("28", "4"),
    ("29", "5"),
    ("30", "1B"),
    ("31", "8"),
    ("32", "1A"),
    ("33", "2"),
    ("34", "7"),
    ("35", "1A"),
    ("36", "2"),
    ("37 1", "1B"),
    ("37 2", "1A"),
    ("38", "4"),
    ("39", "2"),
    ("40", "6A"),
    ("41", "3A"),
    ("42", "5"),
    ("43", "5"),
    ("44", "7"),
    ("45", "8"),
    ("46", "5"),
    ("47", "7"),
    ("48", "1A"),
    ("49", "2"),
    ("50", "3A"),
    ("51", "4"),
    ("52", "7"),
    ("53", "3A"),
    ("54", "4"),
    ("55", "1A"),
    ("56", "1B"),
    ("57", "8"),
    ("58", "7"),
    ("59", "4"),
    ("60", "6C"),
    ("61", "8"),
    ("62", "4"),
    ("63", "1B"),
    ("64", "2"),
    ("65", "7"),
    ("66", "1B"),
    ("67", "8"),
    ("68", "8"),
    ("69", "2"),
    ("70", "4"),
    ("71", "4"),
    ("72", "6C"),
    ("73", "7"),
    ("74", "2"),
    ("75", "1A"),
    ("76", "8"),
    ("77", "2"),
    ("78 1", "1B"),
    ("78 2", "2"),
    ("79", "8"),
    ("80", "4"),
    ("81", "3A"),
    ("82", "8"),
    ("83", "7"),
    ("84", "3A"),
    ("85", "4"),
    ("86", "1B"),
    ("87", "7"),
    ("88", "4"),
    ("89 1", "1B"),
    ("89 2", "5"),
    ("90", "1A"),
    ("91", "8"),
    ("92", "6C"),
    ("93", "5"),
    ("94", "4"),
    ("95", "3A"),
    ("96", "8"),
    ("97", "5"),
    ("98", "6A"),
    ("99", "4"),
    ("100", "8"),
    ("101", "7"),
    ("102", "1A"),
    ("103", "5"),
    ("104", "3A"),
    ("105 1", "6B"),
    ("105 2", "1A"),
    ("106 1", "6C"),
    ("106 2", "1A"),
    ("107 1", "8"),
    ("107 2", "1A"),
    ("108", "8"),
    ("109", "4"),
    ("110", "3A"),
    ("111", "4"),
    ("112", "7"),
    ("113", "5"),
    ("114", "P"),
    ("115", "P"),
    ("116", "2"),
    ("117", "P"),
    ("118", "1A"),
    ("119 Aleph", "3A"),
    ("119 Beth", "3A"),
    ("119 Gimel", "7"),
    ("119 Daleth", "7"),
    ("119 He", "1A"),
    ("119 Waw", "1A"),
    ("119 Zayin", "1A"),
    ("119 Heth", "4"),
    ("119 Yodh", "1B"),
    ("119 Lamedh", "2"),
    ("119 Mem", "2"),
    ("119 Nun", "7"),
    ("119 Samekh", "7"),
    ("119 Ayin", "7"),
    ("119 Pe", "5"),
    ("119 Sadhe", "5"),
    ("119 Qoph", "1A"),
    ("119 Resh", "1A"),
    ("119 Shin", "3A"),
    ("119 Taw", "3A"),
    ("120", "1A"),
    ("121", "1B"),
    ("122", "4"),
    ("123", "1B"),
    ("124", "7"),
    ("125", "8"),
    ("126", "1A"),
    ("127", "2"),
    ("128", "3A"),
    ("129", "4"),
    ("130", "4"),
    ("131", "8"),
    ("132", "6C"),
    ("133", "8"),
    ("134", "8"),
    ("135", "7"),
    ("136", "3A"),
    ("137", "1A"),
    ("138", "5"),
    ("139", "1B"),
    ("140", "3A"),
    ("141", "8"),
    ("142", "6B"),
    ("143", "7"),
    ("144", "1B"),
    ("145", "5"),
    ("146", "4"),
    ("147", "8"),
    ("148", "7"),
    ("149", "6C"),
    ("150", "P"),
];

/// Table key for a psalm and optional 1-based part. Part `n` of Psalm 119 is
/// its `n`-th Hebrew-letter section.
fn table_key(psalm_number: u32, part: Option<u32>) -> Option<String> {
    match part {
        None => Some(psalm_number.to_string()),
        Some(part) if psalm_number == 119 => {
            let section = PSALM_119_SECTIONS.get(usize::try_from(part).ok()?.checked_sub(1)?)?;
            Some(format!("119 {section}"))
        }
        Some(part) => Some(format!("{psalm_number} {part}")),
    }
}

/// Recommended tone for a psalm, if the table has one.
pub fn recommended_tone(psalm_number: u32, part: Option<u32>) -> Option<&'static str> {
    let key = table_key(psalm_number, part)?;
    RECOMMENDED_TONES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, tone)| *tone)
}

/// Set `recommended_tone` on every psalm that lacks one and has a table
/// entry. Returns how many psalms changed.
pub fn apply_recommended_tones(psalms: &mut [Psalm]) -> usize {
    let mut updated = 0;
    for psalm in psalms.iter_mut().filter(|p| p.recommended_tone.is_none()) {
        if let Some(tone) = recommended_tone(psalm.psalm_number, psalm.part) {
            psalm.recommended_tone = Some(tone.to_string());
            updated += 1;
        }
    }
    updated
}
