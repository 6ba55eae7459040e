//! Record blocks of the Wordweb RDF dump.
//!
//! The dump is a sequence of `<rdf:Description>` blocks separated by single
//! empty lines. A [`Record`] is one such block, kept as plain text: nothing is
//! validated here, the synonym passes decide what a record is by matching
//! patterns against it.
//!
//! A concept ("FSH", lemma-as-concept) record looks like this:
//!
//! ```text
//! <rdf:Description rdf:about="http://orda.net/aftækur_fsh_(815)">
//!     <rdf:type rdf:resource="http://www.w3.org/2004/02/skos/core#Concept"/>
//!     <rdfs:label xml:lang="is">aftækur</rdfs:label>
//! </rdf:Description>
//! ```

pub mod loader;

pub use loader::RecordLoader;

/// Separator between two records in the dump.
pub const RECORD_SEPARATOR: &str = "\n\n";

/// One blank-line delimited block of the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    text: String,
}

impl Record {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Record { text: text.into() }
    }

    /// Raw text of the record.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text up to the first line break, or the whole record if it has none.
    pub fn header(&self) -> &str {
        match self.text.split_once('\n') {
            Some((header, _)) => header,
            None => &self.text,
        }
    }

    /// Record text without trailing whitespace.
    pub fn trimmed(&self) -> &str {
        self.text.trim_end()
    }
}

impl From<&str> for Record {
    fn from(text: &str) -> Self {
        Record::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let record =
            Record::new("<rdf:Description rdf:about=\"x\">\n\t<a/>\n</rdf:Description>");
        assert_eq!(record.header(), "<rdf:Description rdf:about=\"x\">");

        let single = Record::new("no line break");
        assert_eq!(single.header(), "no line break");

        let empty = Record::new("");
        assert_eq!(empty.header(), "");
    }

    #[test]
    fn test_trimmed() {
        let record = Record::new("</rdf:Description> \n\t ");
        assert_eq!(record.trimmed(), "</rdf:Description>");
    }
}
