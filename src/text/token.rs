use super::char::space;
use crate::do_parse;
use crate::many::many;
use crate::parser::Parser;
use crate::recognize::recognize;

/// Zero or more whitespace characters, yielded as the skipped slice
pub fn whitespace<'code>() -> impl Parser<'code, Output = &'code str> {
    recognize(many(space()))
}

/// Runs `parser` with whitespace skipped on both sides
pub fn token<'code, P>(parser: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    do_parse! {
        _ = whitespace();
        value = &parser;
        _ = whitespace();
        => value
    }
}
