//! Synonym pairs and their insertion-ordered collection.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Iter;

/// Weight attached to a synonymy relation in the output file.
///
/// The Wordweb does not grade its synonyms, so every pair carries the same
/// weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Weight {
    #[default]
    Normal,
}

impl Weight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Normal => "normal",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.as_str())
    }
}

/// An ordered pair of surface words. `(a, b)` and `(b, a)` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynonymPair {
    pub word: String,
    pub synonym: String,
}

impl SynonymPair {
    pub fn new<A: Into<String>, B: Into<String>>(word: A, synonym: B) -> Self {
        SynonymPair {
            word: word.into(),
            synonym: synonym.into(),
        }
    }

    /// The same pair read in the other direction.
    pub fn reversed(&self) -> Self {
        SynonymPair::new(self.synonym.clone(), self.word.clone())
    }
}

/// Directional synonym pairs in first-seen order.
///
/// Re-inserting an existing pair overwrites its weight but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymPairs {
    pairs: IndexMap<SynonymPair, Weight>,
}

impl SynonymPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pair: SynonymPair, weight: Weight) -> Option<Weight> {
        self.pairs.insert(pair, weight)
    }

    /// Insert `(a, b)` followed by `(b, a)`, both with `weight`.
    pub fn insert_symmetric(&mut self, a: &str, b: &str, weight: Weight) {
        let forward = SynonymPair::new(a, b);
        let reverse = forward.reversed();
        self.insert(forward, weight);
        self.insert(reverse, weight);
    }

    pub fn get(&self, word: &str, synonym: &str) -> Option<Weight> {
        self.pairs.get(&SynonymPair::new(word, synonym)).copied()
    }

    pub fn contains(&self, word: &str, synonym: &str) -> bool {
        self.get(word, synonym).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, SynonymPair, Weight> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a SynonymPairs {
    type Item = (&'a SynonymPair, &'a Weight);
    type IntoIter = Iter<'a, SynonymPair, Weight>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
