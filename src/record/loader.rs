//! Loading the dump into records.

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::error::{OrdanetError, Result};
use crate::record::{RECORD_SEPARATOR, Record};

static LINE_ENDINGS: LazyLock<MappingCharFilter> = LazyLock::new(|| {
    MappingCharFilter::line_endings().expect("line ending table is valid")
});

/// Reads a dump, normalizes it with a char filter and splits it into records.
#[derive(Clone)]
pub struct RecordLoader {
    char_filter: Arc<dyn CharFilter>,
}

impl std::fmt::Debug for RecordLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordLoader")
            .field("char_filter", &self.char_filter.name())
            .finish()
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new().expect("Numeric escape table should be valid")
    }
}

impl RecordLoader {
    /// Create a loader that normalizes the numeric escapes of the Wordweb dump.
    pub fn new() -> Result<Self> {
        Ok(Self::with_char_filter(Arc::new(
            MappingCharFilter::numeric_escapes()?,
        )))
    }

    /// Create a loader with a custom char filter.
    pub fn with_char_filter(char_filter: Arc<dyn CharFilter>) -> Self {
        RecordLoader { char_filter }
    }

    /// Read `path` as UTF-8 and split it into records.
    ///
    /// A missing file or invalid UTF-8 is fatal for the whole run.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| OrdanetError::io_at(path, e))?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(self.parse(&content))
    }

    /// Normalize `text` and split it on blank lines.
    ///
    /// `\r\n` and bare `\r` become `\n` before the char filter runs. Every
    /// block is kept, empty ones included; they never match a pattern.
    pub fn parse(&self, text: &str) -> Vec<Record> {
        let (unix, line_endings) = LINE_ENDINGS.filter(text);
        let (normalized, replaced) = self.char_filter.filter(&unix);
        debug!(
            "Normalized {} line endings, {} char filter replaced {} escapes",
            line_endings,
            self.char_filter.name(),
            replaced
        );

        normalized.split(RECORD_SEPARATOR).map(Record::from).collect()
    }
}
