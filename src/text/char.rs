use crate::filter::FilterExt;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use std::borrow::Cow;

/// Parser that yields the whole remaining input without consuming any of it
pub struct Peek;

impl<'code> Parser<'code> for Peek {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        Ok((input, input))
    }
}

/// Zero-width lookahead at the remaining input
pub fn peek() -> Peek {
    Peek
}

/// Parser that consumes and returns a single character
pub struct OneChar;

impl<'code> Parser<'code> for OneChar {
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => Ok((c, chars.as_str())),
            None => Err(Failure::new("unexpected end of input")),
        }
    }
}

/// Any single character; fails only on empty input
pub fn one_char() -> OneChar {
    OneChar
}

/// A single character accepted by `predicate`, failing with `message` otherwise
pub fn satisfy<'code, F>(
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> impl Parser<'code, Output = char>
where
    F: Fn(char) -> bool,
{
    one_char().filter(move |c: &char| predicate(*c), message)
}

/// Exactly the character `expected`
pub fn is_char<'code>(expected: char) -> impl Parser<'code, Output = char> {
    satisfy(
        move |c| c == expected,
        format!("expected '{}'", expected.escape_default()),
    )
}

pub fn letter<'code>() -> impl Parser<'code, Output = char> {
    satisfy(char::is_alphabetic, "expected letter")
}

/// An ASCII decimal digit
pub fn digit<'code>() -> impl Parser<'code, Output = char> {
    satisfy(|c| c.is_ascii_digit(), "expected digit")
}

/// A single whitespace character, line breaks included
pub fn space<'code>() -> impl Parser<'code, Output = char> {
    satisfy(char::is_whitespace, "expected space")
}
