use crate::parser::Parser;
use crate::result::ParseResult;

/// Applies a function to the value a parser produced
///
/// Only the value is touched: the remaining input and any failure pass through as is.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (value, rest) = self.parser.parse(input)?;
        Ok(((self.mapper)(value), rest))
    }
}

pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// `.map(f)` method syntax
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceExt;
    use crate::text::{integer, is_char, letter};

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(u64),
        Special(char),
    }

    #[test]
    fn test_map_char_to_code() {
        let parser = is_char('A').map(u32::from);

        let (code, rest) = parser.parse("AB").unwrap();
        assert_eq!(code, 65);
        assert_eq!(rest, "B");
    }

    #[test]
    fn test_map_integer_to_string() {
        let parser = integer().map(|num| format!("Number: {}", num));

        let (result, rest) = parser.parse("123").unwrap();
        assert_eq!(result, "Number: 123");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_map_chaining() {
        let parser = is_char('5')
            .map(|c| c.to_digit(10).unwrap_or_default())
            .map(|digit| digit * 2)
            .map(|digit| format!("Digit: {}", digit));

        let (result, _) = parser.parse("5").unwrap();
        assert_eq!(result, "Digit: 10");
    }

    #[test]
    fn test_map_with_choice_common_enum() {
        let letter_parser = letter().map(Token::Letter);
        let number_parser = integer().map(Token::Number);
        let special_parser = is_char('!').map(Token::Special);

        let parser = letter_parser.or(number_parser).or(special_parser);

        assert_eq!(parser.parse("42").unwrap(), (Token::Number(42), ""));
        assert_eq!(parser.parse("x1").unwrap(), (Token::Letter('x'), "1"));
        assert_eq!(parser.parse("!").unwrap(), (Token::Special('!'), ""));
    }

    #[test]
    fn test_map_preserves_failure() {
        let parser = map(is_char('A'), |c| c.len_utf8());
        let error = parser.parse("xyz").unwrap_err();
        assert_eq!(error.message(), "expected 'A'");
    }
}
