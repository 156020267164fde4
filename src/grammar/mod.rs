//! Number grammar built only from the public combinators
//!
//! Every parser here is an ordinary value produced by a function call, so a
//! grammar is built once and then shared by reference wherever larger
//! grammars need it.

use crate::cursors::ByteCursor;
use crate::error::BoxError;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use std::str::FromStr;

pub mod digit;
pub mod float;
pub mod integer;

pub use digit::digit;
pub use float::float;
pub use integer::integer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// Parser that matches either a float or an integer and returns a Number enum
///
/// The float is tried first. Input without a fractional part makes it fail
/// and the same digits are then read again as an integer.
pub fn number<'code>() -> impl Parser<'code, Cursor = ByteCursor<'code>, Output = Number> {
    float().map(Number::Float).or(integer().map(Number::Integer))
}

/// Convert matched ASCII digits into a number
pub(crate) fn decimal<N>(text: &[u8]) -> Result<N, BoxError>
where
    N: FromStr,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(std::str::from_utf8(text)?.parse::<N>()?)
}
