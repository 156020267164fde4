//! # Retrace - Backtracking Parser Combinators
//!
//! Small matching primitives that compose into recursive-descent parsers for
//! arbitrary grammars over fully resident input.
//!
//! The input position is a plain `Copy` value. Every parser receives a cursor
//! and, on success, hands back a new one; on failure the caller still holds
//! the cursor it started with. That makes every parser atomic: a failed
//! attempt never moves the input, however far it explored before giving up.
//!
//! - **No panics**: all failures are [`ParseError`] values with locations
//! - **Ordered choice**: alternatives are tried in order, first success wins
//! - **Semantic actions**: [`transform`] may reject a match, which then
//!   unwinds to where the rejected parser started
//! - **Shareable**: parsers are immutable after construction and can be
//!   reused from any number of threads, each parse owning its own cursor
//!
//! ```
//! use retrace::grammar::{Number, number};
//! use retrace::run_complete;
//!
//! let grammar = number();
//! assert_eq!(run_complete(&grammar, b"0123").unwrap(), Number::Integer(123));
//! assert_eq!(run_complete(&grammar, b"0.5").unwrap(), Number::Float(0.5));
//! assert!(run_complete(&grammar, b"1.5x").is_err());
//! ```

pub mod and;
pub mod atomic;
pub mod cursor;
pub mod cursors;
pub mod end;
pub mod error;
pub mod filter;
pub mod grammar;
pub mod lazy;
pub mod literal;
pub mod map;
pub mod named;
pub mod one_of;
pub mod one_or_more;
pub mod or;
pub mod parser;
pub mod run;
pub mod sequence;
pub mod tag;
pub mod transform;
pub mod zero_or_more;
pub mod zero_or_one;

pub use and::{AndExt, and};
pub use atomic::Atomic;
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, ByteCursor, CharCursor};
pub use end::end_of_input;
pub use error::{BoxError, CodeLoc, ParseError, ReadablePosition};
pub use filter::{FilterExt, filter};
pub use lazy::lazy;
pub use literal::literal;
pub use map::{MapExt, map};
pub use named::NamedExt;
pub use one_of::one_of;
pub use one_or_more::one_or_more;
pub use or::{OrExt, or};
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parser};
pub use run::{run, run_complete};
pub use sequence::sequence;
pub use tag::tag;
pub use transform::{TransformExt, transform};
pub use zero_or_more::zero_or_more;
pub use zero_or_one::zero_or_one;
