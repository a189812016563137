use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that feeds the output of one parser into a function
/// choosing the parser to run next
///
/// The continuation is called anew on every parse, so the parser it builds
/// never outlives a single run.
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (value, rest) = self.parser.parse(input)?;
        (self.continuation)(value).parse(rest)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, continuation)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fail::fail;
    use crate::filter::FilterExt;
    use crate::map::MapExt;
    use crate::pure::pure;
    use crate::text::{digit, is_char, one_char, take_while};

    #[test]
    fn test_bind_threads_remaining_input() {
        // read a digit n, then expect exactly that many 'x'
        let parser = digit().bind(|d| {
            let count = d.to_digit(10).unwrap_or(0) as usize;
            take_while(|c| c == 'x').filter(move |xs: &&str| xs.len() == count, "wrong count")
        });

        let (xs, rest) = parser.parse("3xxx!").unwrap();
        assert_eq!(xs, "xxx");
        assert_eq!(rest, "!");
        assert!(parser.parse("2xxx!").is_err());
    }

    #[test]
    fn test_bind_failure_in_first_stage_is_returned() {
        let parser = is_char('a').bind(|_| is_char('b'));
        let error = parser.parse("zb").unwrap_err();
        assert_eq!(error.message(), "expected 'a'");
    }

    #[test]
    fn test_bind_failure_in_second_stage_is_returned() {
        let parser = is_char('a').bind(|_| fail::<char>("second stage"));
        let error = parser.parse("ab").unwrap_err();
        assert_eq!(error.message(), "second stage");
    }

    #[test]
    fn test_left_identity() {
        // pure(a).bind(f) == f(a)
        let f = |c: char| is_char(c);
        for input in ["qq", "qx", ""] {
            assert_eq!(pure('q').bind(f).parse(input), f('q').parse(input));
        }
    }

    #[test]
    fn test_right_identity() {
        // p.bind(pure) == p
        for input in ["abc", ""] {
            assert_eq!(one_char().bind(pure).parse(input), one_char().parse(input));
        }
    }

    #[test]
    fn test_bind_function_syntax() {
        let parser = bind(one_char(), |first| {
            one_char().map(move |second| [first, second])
        });
        let (pair, rest) = parser.parse("xyz").unwrap();
        assert_eq!(pair, ['x', 'y']);
        assert_eq!(rest, "z");
    }
}
