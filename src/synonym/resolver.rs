//! Resolution of synonymy relation records into word pairs.

use crate::record::Record;
use crate::synonym::pair::{SynonymPairs, Weight};
use crate::synonym::pattern::relation_entry;
use crate::synonym::sense_index::SenseIndex;

/// Turns relation records into directional synonym pairs using a
/// [`SenseIndex`] to look up the written form of each sense.
#[derive(Debug, Clone, Copy)]
pub struct SynonymResolver<'a> {
    index: &'a SenseIndex,
}

impl<'a> SynonymResolver<'a> {
    pub fn new(index: &'a SenseIndex) -> Self {
        SynonymResolver { index }
    }

    /// Words for both ends of a relation, or `None` unless both are indexed.
    pub fn resolve(&self, record: &Record) -> Option<(&'a str, &'a str)> {
        let (source, target) = relation_entry(record)?;
        Some((self.index.get(source)?, self.index.get(target)?))
    }

    /// Collect both directions of every resolvable synonymy relation, in
    /// record order.
    pub fn extract(&self, records: &[Record]) -> SynonymPairs {
        let mut pairs = SynonymPairs::new();
        for (a, b) in records.iter().filter_map(|record| self.resolve(record)) {
            pairs.insert_symmetric(a, b, Weight::Normal);
        }
        pairs
    }
}

/// Second pass: resolve every synonymy relation in `records` against `index`.
pub fn extract_synonyms(records: &[Record], index: &SenseIndex) -> SynonymPairs {
    SynonymResolver::new(index).extract(records)
}
