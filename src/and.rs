use crate::parser::Parser;
use crate::result::ParseResult;

/// Runs two parsers in order and keeps both values as a pair
///
/// Chaining nests to the left, so three `.and()` steps give `(((a, b), c), d)`.
/// For longer rules that need to name their intermediate values,
/// [`do_parse!`] reads better.
///
/// # Example
///
/// ```
/// use monacomb::and::AndExt;
/// use monacomb::text::{integer, is_char};
/// use monacomb::Parser;
///
/// let (((whole, _), fraction), rest) = integer()
///     .and(is_char('.'))
///     .and(integer())
///     .parse("123.456")
///     .unwrap();
/// assert_eq!(whole, 123);
/// assert_eq!(fraction, 456);
/// assert_eq!(rest, "");
/// ```
///
/// [`do_parse!`]: crate::do_parse
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (result1, rest) = self.parser1.parse(input)?;
        let (result2, rest) = self.parser2.parse(rest)?;
        Ok(((result1, result2), rest))
    }
}

/// Pairs the outputs of `parser1` and `parser2`
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
