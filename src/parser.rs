use crate::result::ParseResult;

/// A parser over borrowed string input
///
/// A parser is an immutable function from an input slice to either the parsed
/// value together with the input it did not consume, or a [`Failure`].
/// Parsers hold no mutable state, so one parser value may be run any number of
/// times against any number of inputs.
///
/// [`Failure`]: crate::Failure
pub trait Parser<'code> {
    type Output;

    /// Run the parser against `input`
    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// A parser with its concrete combinator type erased
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

/// Type erasure through `.boxed()`
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Parser backed by a plain function or closure
///
/// This is returned by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (self.0)(input)
    }
}

/// Turn a closure over the input slice into a parser
pub fn from_fn<'code, T, F>(f: F) -> FromFn<F>
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    FromFn(f)
}
