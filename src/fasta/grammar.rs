//! FASTA rules built from the combinators and text primitives.
//!
//! ```text
//! document := record+
//! record   := header sequence
//! header   := token('>') id line
//! sequence := string_without('>')     (line breaks removed)
//! ```

use super::{Document, Header, Record, Sequence};
use crate::do_parse;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::some::some;
use crate::text::{is_char, line, string_without, take_while, token};

/// `>id description`, the description being the trimmed rest of the line
pub fn header<'code>() -> impl Parser<'code, Output = Header> {
    do_parse! {
        _ = token(is_char('>'));
        id = take_while(|c| !c.is_whitespace());
        description = line();
        => Header {
            id: id.to_owned(),
            description: description.trim().to_owned(),
        }
    }
}

/// Residues up to the next record marker, with every line break removed
pub fn sequence<'code>() -> impl Parser<'code, Output = Sequence> {
    string_without('>').map(|residues| Sequence {
        content: residues
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .collect(),
    })
}

pub fn record<'code>() -> impl Parser<'code, Output = Record> {
    do_parse! {
        header = header();
        sequence = sequence();
        => Record { header, sequence }
    }
}

/// One or more records
pub fn document<'code>() -> impl Parser<'code, Output = Document> {
    some(record()).map(|records| Document { records })
}
