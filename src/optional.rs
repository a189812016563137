use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that makes a parser optional
///
/// Equivalent to `choice(p.map(Some), pure(None))`: yields `Some` with the
/// value when the parser succeeds and `None` with the input untouched otherwise.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(input) {
            Ok((value, rest)) => Ok((Some(value), rest)),
            Err(_) => Ok((None, input)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}
