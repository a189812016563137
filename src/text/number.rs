use super::char::{digit, is_char};
use crate::and::AndExt;
use crate::choice::ChoiceExt;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::Parser;
use crate::recognize::recognize;
use crate::result::{Failure, ParseResult};
use crate::sequence::SequenceExt;
use crate::some::some;

/// A numeric literal that was either written with a fractional part or without
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(u64),
    Decimal(f64),
}

/// One or more ASCII digits, yielded as the matched slice
pub fn digits<'code>() -> impl Parser<'code, Output = &'code str> {
    recognize(some(digit()))
}

/// Parser that matches one or more ASCII digits and returns them as a u64
struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = u64;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (literal, rest) = digits().parse(input)?;
        let value = literal
            .parse::<u64>()
            .map_err(|_| Failure::new(format!("number too large: {}", literal)))?;

        Ok((value, rest))
    }
}

pub fn integer<'code>() -> impl Parser<'code, Output = u64> {
    IntegerParser
}

/// Parser for `digits` or `digits.digits`, returned as an f64
struct DecimalParser {
    require_fraction: bool,
}

impl<'code> Parser<'code> for DecimalParser {
    type Output = f64;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (literal, rest) =
            recognize(digits().and(optional(is_char('.').then(digits())))).parse(input)?;
        if self.require_fraction && !literal.contains('.') {
            return Err(Failure::new("expected fractional part"));
        }
        let value = literal
            .parse::<f64>()
            .map_err(|_| Failure::new(format!("invalid decimal: {}", literal)))?;

        if !value.is_finite() {
            return Err(Failure::new("floating point overflow"));
        }

        Ok((value, rest))
    }
}

pub fn decimal<'code>() -> impl Parser<'code, Output = f64> {
    DecimalParser {
        require_fraction: false,
    }
}

/// Parser that matches either a decimal with a fractional part or an integer
pub fn number<'code>() -> impl Parser<'code, Output = Number> {
    let fractional = DecimalParser {
        require_fraction: true,
    };

    fractional
        .map(Number::Decimal)
        .or(integer().map(Number::Integer))
}
