use crate::many::Many;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Repeats a parser, requiring at least one success
///
/// Fails exactly when the first attempt fails; a failure on a later
/// repetition just ends the list.
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<'code, P> Parser<'code> for OneOrMore<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (first, rest) = self.parser.parse(input)?;
        let (mut others, rest) = Many::new(&self.parser).parse(rest)?;

        others.insert(0, first);
        Ok((others, rest))
    }
}

/// One or more `parser` results, in input order
pub fn some<'code, P>(parser: P) -> OneOrMore<P>
where
    P: Parser<'code>,
{
    OneOrMore::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fail::fail;
    use crate::text::{is_char, one_char};

    #[test]
    fn test_some_zero_matches_fails() {
        let parser = some(is_char('a'));
        assert_eq!(parser.parse("xyz").unwrap_err().message(), "expected 'a'");
    }

    #[test]
    fn test_some_one_match() {
        let parser = some(is_char('a'));

        let (results, rest) = parser.parse("abc").unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(rest, "bc");
    }

    #[test]
    fn test_some_multiple_matches() {
        let parser = some(is_char('a'));

        let (results, rest) = parser.parse("aaabcd").unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(rest, "bcd");
    }

    #[test]
    fn test_some_with_one_char() {
        let parser = some(one_char());

        let (results, rest) = parser.parse("hello").unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_some_empty_input() {
        let parser = some(is_char('a'));
        assert!(parser.parse("").is_err());
    }

    #[test]
    fn test_some_of_fail_reports_its_message() {
        let error = some(fail::<()>("nothing")).parse("abc").unwrap_err();
        assert_eq!(error.message(), "nothing");
    }
}
