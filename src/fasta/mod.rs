//! The FASTA sequence format, parsed with the combinators of this crate.
//!
//! A document is one or more records, each a `>`-prefixed header line followed
//! by residue lines:
//!
//! ```
//! use monacomb::fasta::Document;
//!
//! let document: Document = ">id desc\nACGT\nACGT\n>id2\nTTTT\n".parse().unwrap();
//! assert_eq!(document.len(), 2);
//! assert_eq!(document.records()[0].sequence.content, "ACGTACGT");
//! assert_eq!(document.records()[1].header.description, "");
//! ```

pub mod error;
pub mod grammar;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::parser::Parser;
use crate::result::Failure;
use crate::sequence::SequenceExt;
use crate::text::eof;

pub use error::FastaError;

/// Header line of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Identifier, everything between `>` and the first whitespace.
    pub id: String,
    /// Rest of the header line, trimmed. Empty when the line has no description.
    pub description: String,
}

/// Residues of a record, joined across lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub content: String,
}

impl Sequence {
    /// Number of residues
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: Header,
    pub sequence: Sequence,
}

/// A parsed FASTA file; always holds at least one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromStr for Document {
    type Err = Failure;

    /// Parses a whole buffer; the document must account for all of it.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (document, _) = grammar::document().skip(eof()).parse(text)?;
        Ok(document)
    }
}

/// Reads the file at `path` into memory and parses it as one document
pub fn load(path: impl AsRef<Path>) -> Result<Document, FastaError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FastaError::Io {
        path: path.to_owned(),
        source,
    })?;

    Ok(text.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let document: Document = ">x\nAC\n".parse().unwrap();
        assert_eq!(document.len(), 1);
        assert!(!document.is_empty());
        assert_eq!(document.records()[0].sequence.len(), 2);
    }

    #[test]
    fn test_from_str_failure() {
        let error = "no header".parse::<Document>().unwrap_err();
        assert_eq!(error.message(), "expected '>'");
    }

    #[test]
    fn test_iterate_records() {
        let document: Document = ">a\nA\n>b\nCC\n".parse().unwrap();
        let lengths: Vec<usize> = (&document).into_iter().map(|r| r.sequence.len()).collect();
        assert_eq!(lengths, [1, 2]);
        assert_eq!(document.iter().count(), 2);
        assert_eq!(document.into_records().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let error = load("/definitely/not/here.fasta").unwrap_err();
        assert!(matches!(error, FastaError::Io { .. }));
        assert!(error.to_string().contains("not/here.fasta"));
    }
}
