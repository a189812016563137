use super::char::is_char;
use super::token::token;
use crate::between::between;
use crate::choice::choice;
use crate::do_parse;
use crate::parser::Parser;
use crate::separated_list::separated_list;

/// Content between two delimiters, with whitespace skipped around each delimiter
pub fn bracketed<'code, P1, P2, P3>(
    open: P1,
    content: P2,
    close: P3,
) -> impl Parser<'code, Output = P2::Output>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    between(token(open), content, token(close))
}

/// One or more `parser` values separated by commas
pub fn comma_separated<'code, P>(parser: P) -> impl Parser<'code, Output = Vec<P::Output>>
where
    P: Parser<'code>,
{
    separated_list(token(parser), token(is_char(',')))
}

/// `[a, b, ...]` with at least one element
pub fn non_empty_list<'code, P>(parser: P) -> impl Parser<'code, Output = Vec<P::Output>>
where
    P: Parser<'code>,
{
    bracketed(is_char('['), comma_separated(parser), is_char(']'))
}

/// `[]`
pub fn empty_list<'code, T>() -> impl Parser<'code, Output = Vec<T>> {
    do_parse! {
        _ = token(is_char('['));
        _ = token(is_char(']'));
        => Vec::new()
    }
}

/// A bracketed list that may be empty
pub fn list_literal<'code, P>(parser: P) -> impl Parser<'code, Output = Vec<P::Output>>
where
    P: Parser<'code>,
{
    choice(non_empty_list(parser), empty_list())
}
