//! Linear sequencing of dependent parse steps.
//!
//! A grammar rule that runs several parsers in a row, each possibly depending
//! on the values bound before it, reads as nested [`bind`](crate::bind) calls
//! when written by hand. [`do_parse!`](crate::do_parse) writes the same rule as
//! an ordered list of steps:
//!
//! ```
//! use monacomb::text::{integer, is_char, token};
//! use monacomb::{do_parse, Parser};
//!
//! let point = do_parse! {
//!     _ = token(is_char('('));
//!     x = integer();
//!     _ = token(is_char(','));
//!     y = integer();
//!     _ = token(is_char(')'));
//!     => (x, y)
//! };
//!
//! assert_eq!(point.parse("( 3, 4 ) rest").unwrap(), ((3, 4), "rest"));
//! ```
//!
//! Each `pattern = parser;` step runs the parser on the input left by the
//! previous step and binds its value; the final `=> expression` builds the
//! rule's value from the bindings. The steps run strictly left to right and
//! the first failure ends the rule. Step expressions are evaluated anew on
//! every parse, so nothing is carried over between two runs of the same rule.

/// Build a parser from an ordered list of `pattern = parser;` steps ending in
/// `=> expression`. See the [module documentation](crate::do_parse) for details.
#[macro_export]
macro_rules! do_parse {
    (@steps $input:ident; => $result:expr $(,)?) => {
        ::core::result::Result::Ok(($result, $input))
    };
    (@steps $input:ident; $binding:pat = $parser:expr; $($rest:tt)*) => {{
        let ($binding, $input) = $crate::Parser::parse(&$parser, $input)?;
        $crate::do_parse!(@steps $input; $($rest)*)
    }};
    ($($steps:tt)+) => {
        $crate::parser::from_fn(move |input| $crate::do_parse!(@steps input; $($steps)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::parser::{Parser, from_fn};
    use crate::text::{integer, is_char, letter, one_char, take_while};
    use std::cell::Cell;

    #[test]
    fn test_steps_bind_in_order() {
        let parser = do_parse! {
            first = letter();
            _ = is_char('=');
            value = integer();
            => (first, value)
        };

        assert_eq!(parser.parse("x=42;").unwrap(), (('x', 42), ";"));
    }

    #[test]
    fn test_later_step_depends_on_earlier_value() {
        // whatever character opens the quote must also close it
        let quoted = do_parse! {
            quote = one_char();
            body = take_while(move |c| c != quote);
            _ = is_char(quote);
            => body
        };

        assert_eq!(quoted.parse("'abc' rest").unwrap(), ("abc", " rest"));
        assert_eq!(quoted.parse("|a b|").unwrap(), ("a b", ""));
        assert_eq!(
            quoted.parse("\"abc").unwrap_err().message(),
            "unexpected end of input"
        );
    }

    #[test]
    fn test_first_failure_stops_the_rule() {
        let later_runs = Cell::new(0);
        let counting = from_fn(|input| {
            later_runs.set(later_runs.get() + 1);
            Ok(((), input))
        });

        let parser = do_parse! {
            _ = is_char('a');
            _ = is_char('b');
            _ = &counting;
            => ()
        };

        assert_eq!(parser.parse("ax").unwrap_err().message(), "expected 'b'");
        assert_eq!(later_runs.get(), 0);

        assert!(parser.parse("ab").is_ok());
        assert_eq!(later_runs.get(), 1);
    }

    #[test]
    fn test_steps_rebuilt_on_every_parse() {
        let builds = Cell::new(0);
        let build = || {
            builds.set(builds.get() + 1);
            letter()
        };

        let parser = do_parse! {
            c = build();
            => c
        };

        assert_eq!(parser.parse("a").unwrap(), ('a', ""));
        assert_eq!(parser.parse("b").unwrap(), ('b', ""));
        assert!(parser.parse("1").is_err());
        assert_eq!(builds.get(), 3);
    }

    #[test]
    fn test_only_result_expression() {
        let parser = do_parse! { => 5 };
        assert_eq!(parser.parse("abc").unwrap(), (5, "abc"));
    }
}
