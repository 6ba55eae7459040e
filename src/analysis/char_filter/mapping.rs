use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{OrdanetError, Result};

/// Numeric character references that show up as encoding artifacts in the
/// Wordweb dump. This is not general entity decoding.
pub const NUMERIC_ESCAPES: &[(&str, &str)] = &[
    ("&#160;", " "),
    ("&#60;", "<"),
    ("&#62;", ">"),
    ("&#47;", "/"),
];

/// Carriage-return line endings, folded to `\n` so blank-line splitting
/// works on CRLF and CR dumps.
pub const LINE_ENDINGS: &[(&str, &str)] = &[("\r\n", "\n"), ("\r", "\n")];

/// Replaces literal substrings according to a fixed table.
///
/// Matching is leftmost-longest over the whole table in a single pass, so a
/// replacement is never itself re-scanned.
#[derive(Debug, Clone)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut keys: Vec<String> = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in mapping {
            let k = k.into();
            if k.is_empty() {
                return Err(OrdanetError::analysis("mapping key must not be empty"));
            }
            keys.push(k);
            replacements.push(v.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| OrdanetError::analysis(format!("Invalid mapping table: {e}")))?;

        Ok(Self { ac, replacements })
    }

    /// Filter for the four numeric escapes in [`NUMERIC_ESCAPES`].
    pub fn numeric_escapes() -> Result<Self> {
        Self::new(NUMERIC_ESCAPES.iter().copied())
    }

    /// Filter for the line endings in [`LINE_ENDINGS`].
    pub fn line_endings() -> Result<Self> {
        Self::new(LINE_ENDINGS.iter().copied())
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> (String, usize) {
        let mut output = String::with_capacity(input.len());
        let mut replaced = 0;
        let mut last = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last = m.end();
            replaced += 1;
        }
        output.push_str(&input[last..]);

        (output, replaced)
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
