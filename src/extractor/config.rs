//! Configuration for an extraction run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OrdanetError, Result};

/// Default name of the Wordweb RDF dump.
pub const DEFAULT_INPUT: &str = "wordnet.rdf";

/// Default name of the synonym file.
pub const DEFAULT_OUTPUT: &str = "synonyms.txt";

/// Input and output locations of an extraction run.
///
/// Can be read from a JSON file; missing fields fall back to the defaults:
///
/// ```json
/// { "input": "data/wordnet.rdf", "output": "out/synonyms.txt" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Path of the Wordweb RDF dump.
    pub input: PathBuf,
    /// Path the synonym list is written to.
    pub output: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ExtractorConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input: I, output: O) -> Self {
        ExtractorConfig {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            OrdanetError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            OrdanetError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn with_input<P: Into<PathBuf>>(mut self, input: P) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }
}
