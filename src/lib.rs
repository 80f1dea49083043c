//! # Parsido - Parser Combinator Library
//!
//! A small recursive-descent parser combinator library over text.
//!
//! A grammar is assembled bottom-up: leaf parsers ([`word`], [`pattern`],
//! [`unit`], [`get`], [`put`], [`fail`]) are the only parsers that touch the
//! [`Cursor`]; everything else is composed through [`sequence`], which runs
//! sub-parsers one after another and gives up on the first one that fails.
//!
//! - **No backtracking surprises**: a failed parse never consumes input, and
//!   choice is ordered ([`or`] tries its branches left to right)
//! - **Three outcomes**: a match, a soft failure (`Ok(None)`), or an escalated
//!   [`ParserFailure`] raised through [`Run::throwable`]
//! - **Flat results**: [`cat`] and the repetition combinators concatenate
//!   their results as [`Match`] sequences; string literals match silently
//!
//! ```
//! use parsido::{CatExt, Match, Parser, SepByExt, pattern, word};
//!
//! let number = pattern("[0-9]+").unwrap();
//! let call = word("max").cat("(").cat(number.sep_by(",")).cat(")");
//!
//! let (value, rest) = call.parse_str("max(3, 14, 1);").unwrap().unwrap();
//! assert_eq!(Match::Seq(value).tokens(), vec!["max", "3", "14", "1"]);
//! assert_eq!(rest, ";");
//! ```
//!
//! Set `PARSIDO_DEBUG` to trace the engine on stderr; see [`debug`].

pub mod bind;
pub mod cat;
pub mod cursor;
pub mod debug;
pub mod error;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod matched;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod recursive;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod state;
pub mod unit;
pub mod word;

pub use bind::{BindExt, bind};
pub use cat::{CatExt, cat, seq};
pub use cursor::Cursor;
pub use error::{GrammarError, ParserFailure};
pub use lazy::lazy;
pub use literal::{SilentExt, silent};
pub use many::{MoreThan0Ext, more_than0};
pub use map::{MapExt, map};
pub use matched::Match;
pub use optional::{OptionalExt, optional};
pub use or::{OrExt, one_of, or};
pub use parser::{BoxedExt, BoxedParser, Outcome, Parser};
pub use pattern::{Pattern, pattern};
pub use recursive::{Recursive, RecursiveRef, recursive};
pub use separated_list::{SepByExt, sep_by};
pub use sequence::{Abort, Run, sequence};
pub use some::{MoreThan1Ext, more_than1};
pub use state::{get, put};
pub use unit::{empty, fail, unit};
pub use word::{Word, word};
