use crate::many::Many;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::sequence::Right;

/// One item, then any number of `separator item` pairs, collected in order
///
/// `"a,b,c"` with `is_char(',')` yields `['a', 'b', 'c']`. An empty input is a
/// failure, and a dangling separator such as the one in `"a,b,"` is left in the
/// remaining input. Whitespace around items is the caller's business.
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (first, rest) = self.parser.parse(input)?;
        let (mut others, rest) =
            Many::new(Right::new(&self.separator, &self.parser)).parse(rest)?;

        others.insert(0, first);
        Ok((others, rest))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
