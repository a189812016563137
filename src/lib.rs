//! # MonaComb - Monadic Parser Combinators
//!
//! A small parser combinator library over string slices, with a FASTA
//! grammar built on top of it as a worked example.
//!
//! A [`Parser`] is an immutable function from an input slice to either the
//! parsed value and the remaining input, or a [`Failure`] message. Parsers are
//! combined with:
//!
//! - **Monadic core**: [`pure`], [`fail`], [`bind`], [`map`], [`filter`]
//! - **Alternation**: [`choice`] backtracks to the original input before
//!   trying its second branch
//! - **Sequencing**: [`sequence_left`], [`sequence_right`], [`and`], [`apply`],
//!   and [`do_parse!`] for rules with several dependent steps
//! - **Repetition**: [`some`], [`many`], [`separated_list`]
//!
//! Failures carry no position and are never merged: the first failure along a
//! chain of steps is the one the caller sees.
//!
//! ```
//! use monacomb::text::{integer, is_char, token};
//! use monacomb::{do_parse, many, Parser};
//!
//! let pair = do_parse! {
//!     key = integer();
//!     _ = token(is_char('='));
//!     value = integer();
//!     => (key, value)
//! };
//! let pairs = many(token(pair));
//!
//! let (parsed, rest) = pairs.parse("1 = 2  3=4").unwrap();
//! assert_eq!(parsed, vec![(1, 2), (3, 4)]);
//! assert_eq!(rest, "");
//! ```

pub mod and;
pub mod apply;
pub mod between;
pub mod bind;
pub mod choice;
pub mod do_parse;
pub mod fail;
pub mod fasta;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod optional;
pub mod parser;
pub mod pure;
pub mod recognize;
pub mod result;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod text;

pub use and::{AndExt, and};
pub use apply::{ApplyExt, apply};
pub use between::between;
pub use bind::{BindExt, bind};
pub use choice::{ChoiceExt, choice};
pub use fail::fail;
pub use filter::{FilterExt, filter};
pub use lazy::lazy;
pub use many::many;
pub use map::{MapExt, map};
pub use optional::optional;
pub use parser::{BoxedExt, BoxedParser, Parser, from_fn};
pub use pure::pure;
pub use recognize::{RecognizeExt, recognize};
pub use result::{Failure, ParseResult, failure, success};
pub use separated_list::separated_list;
pub use sequence::{SequenceExt, sequence_left, sequence_right};
pub use some::some;
