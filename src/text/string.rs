use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use std::borrow::Cow;

/// Parser that matches an exact string at the start of the input
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        if input.starts_with(self.expected.as_ref()) {
            Ok(input.split_at(self.expected.len()))
        } else {
            Err(Failure::new(format!("expected \"{}\"", self.expected)))
        }
    }
}

/// The literal `expected` as a prefix of the input
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}

/// Parser that matches an exact string at the end of the input
pub struct EndsWithParser {
    expected: Cow<'static, str>,
}

impl<'code> Parser<'code> for EndsWithParser {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match input.strip_suffix(self.expected.as_ref()) {
            Some(rest) => Ok((&input[rest.len()..], rest)),
            None => Err(Failure::new(format!(
                "expected input ending in \"{}\"",
                self.expected
            ))),
        }
    }
}

/// The literal `expected` as a suffix of the input
///
/// On success the suffix is the value and the input before it is what remains.
pub fn ends_with(expected: impl Into<Cow<'static, str>>) -> EndsWithParser {
    EndsWithParser {
        expected: expected.into(),
    }
}

/// Parser that matches the longest run of characters accepted by a predicate
pub struct TakeWhile<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let end = input
            .char_indices()
            .find(|&(_, c)| !(self.predicate)(c))
            .map_or(input.len(), |(index, _)| index);

        Ok(input.split_at(end))
    }
}

/// The longest run of characters accepted by `predicate`, possibly empty
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile { predicate }
}

/// Every character up to the first `excluded` or the end of input
///
/// The excluded character itself is never consumed.
pub fn string_without<'code>(excluded: char) -> impl Parser<'code, Output = &'code str> {
    take_while(move |c| c != excluded)
}
