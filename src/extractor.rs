//! End-to-end extraction: dump in, synonym file out.
//!
//! ```no_run
//! use ordanet::extractor::{Extractor, ExtractorConfig};
//!
//! let config = ExtractorConfig::new("wordnet.rdf", "synonyms.txt");
//! let summary = Extractor::new(config).unwrap().run().unwrap();
//! println!("{} synonym lines written", summary.pairs);
//! ```

pub mod config;

use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

pub use config::ExtractorConfig;

use crate::error::Result;
use crate::record::{Record, RecordLoader};
use crate::synonym::writer::write_to_file;
use crate::synonym::{SenseIndex, SynonymPairs, extract_synonyms};

/// Counts describing one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub input: PathBuf,
    /// `None` when nothing was written.
    pub output: Option<PathBuf>,
    pub records: usize,
    pub senses: usize,
    pub pairs: usize,
}

/// Result of both passes, before anything is written.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub index: SenseIndex,
    pub pairs: SynonymPairs,
}

/// Runs the loader, both synonym passes and the writer for one configuration.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    loader: RecordLoader,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(Self::with_loader(config, RecordLoader::new()?))
    }

    pub fn with_loader(config: ExtractorConfig, loader: RecordLoader) -> Self {
        Extractor { config, loader }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Load the input and run both passes without writing anything.
    pub fn extract(&self) -> Result<Extraction> {
        let records = self.loader.load(&self.config.input)?;
        info!(
            "Loaded {} records from {}",
            records.len(),
            self.config.input.display()
        );

        let index = SenseIndex::build(&records);
        info!("Indexed {} senses", index.len());

        let pairs = extract_synonyms(&records, &index);
        info!("Resolved {} directional synonym pairs", pairs.len());

        Ok(Extraction {
            records,
            index,
            pairs,
        })
    }

    /// Like [`Extractor::extract`], reporting counts only.
    pub fn stats(&self) -> Result<ExtractionSummary> {
        let extraction = self.extract()?;
        Ok(self.summary(&extraction, None))
    }

    /// Extract and write the synonym file.
    pub fn run(&self) -> Result<ExtractionSummary> {
        let extraction = self.extract()?;
        let lines = write_to_file(&extraction.pairs, &self.config.output)?;
        info!("Wrote {} lines to {}", lines, self.config.output.display());
        Ok(self.summary(&extraction, Some(self.config.output.clone())))
    }

    fn summary(&self, extraction: &Extraction, output: Option<PathBuf>) -> ExtractionSummary {
        ExtractionSummary {
            input: self.config.input.clone(),
            output,
            records: extraction.records.len(),
            senses: extraction.index.len(),
            pairs: extraction.pairs.len(),
        }
    }
}
