use crate::parser::Parser;
use crate::result::ParseResult;

/// Runs two parsers in order and keeps the value of the first
pub struct Left<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Left<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Left { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Left<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (value, rest) = self.parser1.parse(input)?;
        let (_, rest) = self.parser2.parse(rest)?;
        Ok((value, rest))
    }
}

/// Runs two parsers in order and keeps the value of the second
pub struct Right<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Right<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Right { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Right<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (_, rest) = self.parser1.parse(input)?;
        self.parser2.parse(rest)
    }
}

pub fn sequence_left<'code, P1, P2>(parser1: P1, parser2: P2) -> Left<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Left::new(parser1, parser2)
}

pub fn sequence_right<'code, P1, P2>(parser1: P1, parser2: P2) -> Right<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Right::new(parser1, parser2)
}

/// Extension trait to add .skip() and .then() method support for parsers
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    /// Run `other` after this parser and discard its value
    fn skip<P>(self, other: P) -> Left<Self, P>
    where
        P: Parser<'code>,
    {
        Left::new(self, other)
    }

    /// Run `other` after this parser and keep only its value
    fn then<P>(self, other: P) -> Right<Self, P>
    where
        P: Parser<'code>,
    {
        Right::new(self, other)
    }
}

impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}
