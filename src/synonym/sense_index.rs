//! Sense id to surface word index, built from concept records.

use std::collections::HashMap;

use crate::record::Record;
use crate::synonym::pattern::{SenseId, concept_entry};

/// Maps the id of each lexical sense to its written form.
///
/// Built once by [`SenseIndex::build`] from the concept ("FSH") records and
/// only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenseIndex {
    words: HashMap<SenseId, String>,
}

impl SenseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every concept record that has both an id and an Icelandic label.
    ///
    /// Other records are ignored. When two concept records share an id, the
    /// later one wins.
    pub fn build(records: &[Record]) -> Self {
        let mut index = SenseIndex::new();
        for (id, word) in records.iter().filter_map(concept_entry) {
            index.insert(id, word);
        }
        index
    }

    /// Map `id` to `word`, replacing any previous mapping.
    pub fn insert<S: Into<String>>(&mut self, id: SenseId, word: S) -> Option<String> {
        self.words.insert(id, word.into())
    }

    pub fn get(&self, id: SenseId) -> Option<&str> {
        self.words.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: SenseId) -> bool {
        self.words.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SenseId, &str)> {
        self.words.iter().map(|(id, word)| (*id, word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(word: &str, id: &str) -> Record {
        Record::new(format!(
            "<rdf:Description rdf:about=\"http://orda.net/{word}_fsh_({id})\">\n\
             \t<rdf:type rdf:resource=\"http://www.w3.org/2004/02/skos/core#Concept\"/>\n\
             \t<rdfs:label xml:lang=\"is\">{word}</rdfs:label>\n\
             </rdf:Description>"
        ))
    }

    #[test]
    fn test_build_index() {
        let records = vec![
            concept("aftækur", "815"),
            Record::new("<rdf:Description rdf:about=\"http://orda.net/ontolexLexicalSense_(3)\">"),
            concept("fráhvarf", "3"),
        ];

        let index = SenseIndex::build(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(815), Some("aftækur"));
        assert_eq!(index.get(3), Some("fráhvarf"));
        assert!(!index.contains(4));
    }

    #[test]
    fn test_skips_noise() {
        let records = vec![
            concept("a", "abc"),
            Record::new(""),
            Record::new(
                "<rdf:Description rdf:about=\"http://orda.net/b_fsh_(9)\">\n\
                 \t<rdfs:label xml:lang=\"en\">b</rdfs:label>\n\
                 </rdf:Description>",
            ),
        ];

        let index = SenseIndex::build(&records);
        assert!(index.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let records = vec![concept("fyrri", "7"), concept("seinni", "7")];

        let index = SenseIndex::build(&records);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(7), Some("seinni"));
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut index = SenseIndex::new();
        assert_eq!(index.insert(1, "a"), None);
        assert_eq!(index.insert(1, "b"), Some("a".to_string()));
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![(1, "b")]);
    }
}
