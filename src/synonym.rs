//! Synonym extraction from Wordweb records.
//!
//! In the Wordweb, synonymy is a "sense relation" linking the lexical senses
//! of two entries. Extraction runs in two passes over the same records:
//!
//! 1. [`SenseIndex::build`] maps each sense id to its written form, taken from
//!    the lemma-as-concept ("FSH") record of that sense.
//! 2. [`extract_synonyms`] finds every synonymy relation record, looks both
//!    ends up in the index and stores the pair in both directions.
//!
//! # Components
//!
//! - [`pattern`] - Id and label extraction from single records
//! - [`sense_index`] - Sense id to word index
//! - [`pair`] - Ordered word pairs and their weight
//! - [`resolver`] - Relation resolution
//! - [`writer`] - `WORD1=WORD2(normal)` output
//!
//! # Examples
//!
//! ```
//! use ordanet::record::RecordLoader;
//! use ordanet::synonym::{SenseIndex, extract_synonyms};
//!
//! let dump = "<rdf:Description rdf:about=\"http://orda.net/aftækur_fsh_(3)\">\n\
//!     \t<rdfs:label xml:lang=\"is\">aftækur</rdfs:label>\n\
//!     </rdf:Description>\n\
//!     \n\
//!     <rdf:Description rdf:about=\"http://orda.net/fráhvarf_fsh_(815)\">\n\
//!     \t<rdfs:label xml:lang=\"is\">fráhvarf</rdfs:label>\n\
//!     </rdf:Description>\n\
//!     \n\
//!     <rdf:Description rdf:about=\"http://orda.net/senseRelation_(3-815)\">\n\
//!     \t<vartrans:category rdf:resource=\"http://www.lexinfo.net/ontology/2.0/lexinfo#synonym\"/>\n\
//!     </rdf:Description>\n";
//!
//! let records = RecordLoader::default().parse(dump);
//! let index = SenseIndex::build(&records);
//! let pairs = extract_synonyms(&records, &index);
//!
//! assert!(pairs.contains("aftækur", "fráhvarf"));
//! assert!(pairs.contains("fráhvarf", "aftækur"));
//! ```

pub mod pair;
pub mod pattern;
pub mod resolver;
pub mod sense_index;
pub mod writer;

pub use pair::{SynonymPair, SynonymPairs, Weight};
pub use pattern::SenseId;
pub use resolver::{SynonymResolver, extract_synonyms};
pub use sense_index::SenseIndex;
