use super::string::string_without;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};

/// Everything up to, but not including, the next newline or the end of input
pub fn line<'code>() -> impl Parser<'code, Output = &'code str> {
    string_without('\n')
}

/// Succeeds without consuming anything when no input is left
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        if input.is_empty() {
            Ok(((), input))
        } else {
            Err(Failure::new("expected end of input"))
        }
    }
}

pub fn eof() -> Eof {
    Eof
}

/// Succeeds without consuming anything at the end of input or before a newline
pub struct EndOfLine;

impl<'code> Parser<'code> for EndOfLine {
    type Output = ();

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        if input.is_empty() || input.starts_with('\n') {
            Ok(((), input))
        } else {
            Err(Failure::new("expected end of line"))
        }
    }
}

pub fn end_of_line() -> EndOfLine {
    EndOfLine
}
