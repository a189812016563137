use crate::parser::Parser;
use crate::result::ParseResult;

/// `open content close`, keeping only the value of `content`
///
/// Whitespace is not skipped; for that see [`text::bracketed`](crate::text::bracketed).
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (_, rest) = self.open.parse(input)?;
        let (content, rest) = self.content.parse(rest)?;
        let (_, rest) = self.close.parse(rest)?;

        Ok((content, rest))
    }
}

/// Wraps `content` in the `open` and `close` delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{decimal, is_char, is_string};

    #[test]
    fn test_brackets_number() {
        let parser = between(is_char('['), decimal(), is_char(']'));

        let (value, rest) = parser.parse("[42.5]").unwrap();
        assert!((value - 42.5).abs() < f64::EPSILON);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parentheses_string() {
        let parser = between(is_char('('), is_string("hello"), is_char(')'));

        let (value, _) = parser.parse("(hello)").unwrap();
        assert_eq!(value, "hello");
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let parser = between(is_char('['), decimal(), is_char(']'));
        assert_eq!(parser.parse("42.0]").unwrap_err().message(), "expected '['");
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let parser = between(is_char('['), decimal(), is_char(']'));
        assert_eq!(
            parser.parse("[42.0)").unwrap_err().message(),
            "expected ']'"
        );
        assert_eq!(
            parser.parse("[42.0").unwrap_err().message(),
            "unexpected end of input"
        );
    }

    #[test]
    fn test_with_remaining_content() {
        let parser = between(is_char('['), decimal(), is_char(']'));

        let (value, rest) = parser.parse("[42.0] extra").unwrap();
        assert!((value - 42.0).abs() < f64::EPSILON);
        assert_eq!(rest, " extra");
    }
}
