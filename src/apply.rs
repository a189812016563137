use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs a parser, then a parser producing a function,
/// and applies that function to the first value
pub struct Apply<P, PF> {
    parser: P,
    function: PF,
}

impl<P, PF> Apply<P, PF> {
    pub fn new(parser: P, function: PF) -> Self {
        Apply { parser, function }
    }
}

impl<'code, P, PF, F, U> Parser<'code> for Apply<P, PF>
where
    P: Parser<'code>,
    PF: Parser<'code, Output = F>,
    F: FnOnce(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (value, rest) = self.parser.parse(input)?;
        let (function, rest) = self.function.parse(rest)?;
        Ok((function(value), rest))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, P, PF, F, U>(parser: P, function: PF) -> Apply<P, PF>
where
    P: Parser<'code>,
    PF: Parser<'code, Output = F>,
    F: FnOnce(P::Output) -> U,
{
    Apply::new(parser, function)
}

/// Extension trait to add .apply() method support for parsers
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PF, F, U>(self, function: PF) -> Apply<Self, PF>
    where
        PF: Parser<'code, Output = F>,
        F: FnOnce(Self::Output) -> U,
    {
        Apply::new(self, function)
    }
}

impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceExt;
    use crate::map::MapExt;
    use crate::text::{integer, is_char, token};

    #[test]
    fn test_apply_operator_after_operand() {
        // "<n> +1" or "<n> *2" with the operator chosen after the operand
        let increment = token(is_char('+')).map(|_| (|n: u64| n + 1) as fn(u64) -> u64);
        let double = token(is_char('*')).map(|_| (|n: u64| n * 2) as fn(u64) -> u64);
        let parser = integer().apply(increment.or(double));

        assert_eq!(parser.parse("20 +").unwrap(), (21, ""));
        assert_eq!(parser.parse("20*x").unwrap(), (40, "x"));
    }

    #[test]
    fn test_apply_fails_when_either_part_fails() {
        let parser = apply(integer(), is_char('!').map(|_| |n: u64| n * 10));

        assert_eq!(parser.parse("3!").unwrap(), (30, ""));
        assert_eq!(parser.parse("x!").unwrap_err().message(), "expected digit");
        assert_eq!(parser.parse("3?").unwrap_err().message(), "expected '!'");
    }
}
