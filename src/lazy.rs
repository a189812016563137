use crate::parser::Parser;
use crate::result::ParseResult;

/// Builds its inner parser on every call to `parse`
///
/// Lets a grammar rule refer to itself, directly or through other rules,
/// without building an infinitely large combinator value.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(input)
    }
}

/// Defers `factory()` until the parser is run
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
