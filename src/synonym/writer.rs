//! Writing synonym pairs in the library-catalog line format.
//!
//! Each directional pair becomes one line:
//!
//! ```text
//! aftækur=fráhvarf(normal)
//! fráhvarf=aftækur(normal)
//! ```
//!
//! Words are written as-is, without escaping.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{OrdanetError, Result};
use crate::synonym::pair::{SynonymPair, SynonymPairs, Weight};

/// Format one output line, including the trailing newline.
pub fn format_line(pair: &SynonymPair, weight: Weight) -> String {
    format!("{}={}{}\n", pair.word, pair.synonym, weight)
}

/// Write all pairs to `writer` in collection order. Returns the number of
/// lines written.
pub fn write_pairs<W: Write>(pairs: &SynonymPairs, writer: &mut W) -> Result<usize> {
    let mut lines = 0;
    for (pair, weight) in pairs {
        writer.write_all(format_line(pair, *weight).as_bytes())?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}

/// Create (or truncate) `path` and write all pairs to it.
pub fn write_to_file<P: AsRef<Path>>(pairs: &SynonymPairs, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| OrdanetError::io_at(path, e))?;
    let mut writer = BufWriter::new(file);
    write_pairs(pairs, &mut writer).map_err(|e| match e {
        OrdanetError::Io(io) => OrdanetError::io_at(path, io),
        other => other,
    })
}
