//! Character-level building blocks: single characters, literals, runs of
//! characters, lines, tokens, numbers and bracketed lists.

pub mod char;
pub mod line;
pub mod list;
pub mod number;
pub mod string;
pub mod token;

pub use char::{digit, is_char, letter, one_char, peek, satisfy, space};
pub use line::{end_of_line, eof, line};
pub use list::{bracketed, comma_separated, empty_list, list_literal, non_empty_list};
pub use number::{Number, decimal, digits, integer, number};
pub use string::{ends_with, is_string, string_without, take_while};
pub use token::{token, whitespace};
