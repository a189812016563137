use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with a fixed message without consuming input
pub struct Fail<T> {
    message: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _output: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _input: &'code str) -> ParseResult<'code, Self::Output> {
        Err(Failure::new(self.message.clone()))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}
