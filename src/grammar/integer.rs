use super::decimal;
use super::digit::digit;
use crate::cursors::ByteCursor;
use crate::one_or_more::one_or_more;
use crate::parser::Parser;
use crate::transform::TransformExt;

/// Parser for an unsigned run of ASCII digits, as an `i64`
///
/// Leading zeros are accepted. A run too large for `i64` is rejected and
/// leaves the digits unconsumed.
pub fn integer<'code>() -> impl Parser<'code, Cursor = ByteCursor<'code>, Output = i64> {
    one_or_more(digit()).transform(|digits: Vec<u8>| decimal::<i64>(&digits))
}
