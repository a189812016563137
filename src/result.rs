use std::borrow::Cow;
use thiserror::Error;

/// The failure side of every parse step
///
/// A failure is nothing but a message: it carries no position and no kind, and
/// two failures are never merged. Whichever failure is produced first travels
/// unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: Cow<'static, str>,
}

impl Failure {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&'static str> for Failure {
    fn from(message: &'static str) -> Self {
        Failure::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::new(message)
    }
}

/// Outcome of running a parser: the parsed value and the input left over, or a failure
pub type ParseResult<'code, T> = Result<(T, &'code str), Failure>;

/// Wraps a value as a successful outcome
pub fn success<T>(value: T) -> Result<T, Failure> {
    Ok(value)
}

/// Wraps a message as a failed outcome
pub fn failure<T>(message: impl Into<Cow<'static, str>>) -> Result<T, Failure> {
    Err(Failure::new(message))
}
