//! Pattern extractors for concept and relation records.
//!
//! All extractors return `None` when a record does not have the expected
//! shape. A non-match is ordinary corpus noise and must never abort a pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::Record;

/// Numeric identifier of a lexical sense.
pub type SenseId = u64;

/// Header marker of a lemma-as-concept ("FSH") record.
pub const CONCEPT_MARKER: &str = "_fsh_(";

/// Category marker of a synonymy relation.
pub const SYNONYM_MARKER: &str = "lexinfo#synonym";

/// Suffix of a complete relation record.
pub const RELATION_CLOSING: &str = "rdf:Description>";

static CONCEPT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"_fsh_\((.+?)\)">"#).expect("concept id pattern is valid"));

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<rdfs:label xml:lang="is">(.+?)</rdfs:label>"#).expect("label pattern is valid")
});

static RELATION_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"senseRelation_\((.+?)-").expect("relation source pattern is valid")
});

static RELATION_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"-(.+?)\)">"#).expect("relation target pattern is valid"));

/// First capture group of `pattern` in `text`, if it is non-empty.
fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Parse a captured sense id. Surrounding whitespace is tolerated.
pub fn parse_sense_id(raw: &str) -> Option<SenseId> {
    raw.trim().parse().ok()
}

/// Sense id and Icelandic label of a concept record.
///
/// `None` if the header lacks the concept marker, or if either the id or the
/// label cannot be extracted.
pub fn concept_entry(record: &Record) -> Option<(SenseId, &str)> {
    let header = record.header();
    if !header.contains(CONCEPT_MARKER) {
        return None;
    }

    let id = capture(&CONCEPT_ID, header).and_then(parse_sense_id)?;
    let word = capture(&LABEL, record.text())?;
    Some((id, word))
}

/// Whether a record is a complete synonymy relation.
pub fn is_synonym_relation(record: &Record) -> bool {
    let trimmed = record.trimmed();
    trimmed.contains(SYNONYM_MARKER) && trimmed.ends_with(RELATION_CLOSING)
}

/// Source and target sense ids of a synonymy relation record.
///
/// The ids come from the first `senseRelation_(A-B)">` identifier anywhere
/// in the record, so a block preceded by a stray empty line still resolves.
/// Source and target are extracted independently of each other.
pub fn relation_entry(record: &Record) -> Option<(SenseId, SenseId)> {
    if !is_synonym_relation(record) {
        return None;
    }

    let text = record.trimmed();
    let source = capture(&RELATION_SOURCE, text).and_then(parse_sense_id)?;
    let target = capture(&RELATION_TARGET, text).and_then(parse_sense_id)?;
    Some((source, target))
}
