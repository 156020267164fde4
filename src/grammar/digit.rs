use crate::cursors::ByteCursor;
use crate::literal::literal;
use crate::one_of::one_of;
use crate::parser::Parser;

/// Parser that matches a single ASCII digit (0-9)
pub fn digit<'code>() -> impl Parser<'code, Cursor = ByteCursor<'code>, Output = u8> {
    one_of((b'0'..=b'9').map(literal))
}
