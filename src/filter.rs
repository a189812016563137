use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use std::borrow::Cow;

/// Runs a parser and rejects any value the predicate does not accept
///
/// When the predicate rejects the value the whole step fails with the
/// configured message. Nothing is rewound: a rejected filter is only
/// recoverable when an enclosing [`choice`](crate::choice) restarts from its
/// own entry point.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (value, rest) = self.parser.parse(input)?;

        if (self.predicate)(&value) {
            Ok((value, rest))
        } else {
            Err(Failure::new(self.error_message.clone()))
        }
    }
}

/// `.filter(predicate, message)` method syntax
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Fails with `error_message` whenever `predicate` rejects the parsed value
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
