use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the original input, however much the
/// first one consumed before failing. When both fail only the second failure
/// is reported.
pub struct Choice<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Choice<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Choice { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Choice<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(input) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(input),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait ChoiceExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Choice<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Choice::new(self, other)
    }
}

/// Implement ChoiceExt for all parsers
impl<'code, P> ChoiceExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Choice parser
pub fn choice<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Choice<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Choice::new(parser1, parser2)
}
