use crate::parser::Parser;
use crate::result::{Failure, ParseResult};

/// Parser combinator that yields the slice of input consumed by another parser
///
/// The inner value is discarded. Useful to collect a run of characters as a
/// borrowed `&str` instead of building a `Vec<char>`.
pub struct Recognize<P> {
    parser: P,
}

impl<P> Recognize<P> {
    pub fn new(parser: P) -> Self {
        Recognize { parser }
    }
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (_, rest) = self.parser.parse(input)?;

        let consumed = input
            .len()
            .checked_sub(rest.len())
            .and_then(|end| input.get(..end))
            .ok_or_else(|| Failure::new("parser left more input than it was given"))?;
        Ok((consumed, rest))
    }
}

/// Convenience function to create a Recognize parser
pub fn recognize<'code, P>(parser: P) -> Recognize<P>
where
    P: Parser<'code>,
{
    Recognize::new(parser)
}

/// Extension trait to add .recognize() method support for parsers
pub trait RecognizeExt<'code>: Parser<'code> + Sized {
    fn recognize(self) -> Recognize<Self> {
        Recognize::new(self)
    }
}

impl<'code, P> RecognizeExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many;
    use crate::text::{digit, is_char, letter};

    #[test]
    fn test_recognize_returns_consumed_slice() {
        let parser = recognize(many(letter()));

        let (word, rest) = parser.parse("héllo world").unwrap();
        assert_eq!(word, "héllo");
        assert_eq!(rest, " world");
    }

    #[test]
    fn test_recognize_empty_match() {
        let (digits, rest) = many(digit()).recognize().parse("abc").unwrap();
        assert_eq!(digits, "");
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_recognize_propagates_failure() {
        let error = is_char('x').recognize().parse("y").unwrap_err();
        assert_eq!(error.message(), "expected 'x'");
    }
}
