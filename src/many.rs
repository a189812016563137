use crate::parser::Parser;
use crate::result::ParseResult;

/// Zero or more repetitions of a parser
///
/// Behaves as `choice(some(p), pure(vec![]))` and therefore never fails: it
/// collects every consecutive success and leaves the input where the first
/// failing attempt started. Repetition also stops after an attempt that
/// succeeds without consuming anything.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        while let Ok((value, rest)) = self.parser.parse(input) {
            results.push(value);
            let stalled = rest.len() == input.len();
            input = rest;
            if stalled {
                break;
            }
        }

        Ok((results, input))
    }
}

pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
