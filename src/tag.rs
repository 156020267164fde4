use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches an exact sequence of elements
///
/// Produces the matched slice of the input itself, so a successful match
/// copies nothing. On a mismatch the error points at the offending element,
/// but the caller's cursor is untouched.
#[derive(Debug, Clone)]
pub struct Tag<T> {
    expected: Vec<T>,
}

impl<T: Atomic> Tag<T> {
    pub fn new(expected: impl AsRef<[T]>) -> Self {
        Tag {
            expected: expected.as_ref().to_vec(),
        }
    }
}

impl<'code, T: Atomic> Parser<'code> for Tag<T> {
    type Cursor = AtomicCursor<'code, T>;
    type Output = &'code [T];

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut current = cursor;

        for &expected in &self.expected {
            let found = current.value()?;
            if found != expected {
                return Err(ParseError::UnexpectedElement {
                    expected,
                    found,
                    loc: current.loc(),
                });
            }
            current = current.next();
        }

        let matched = &cursor.source()[cursor.position()..current.position()];
        Ok((matched, current))
    }
}

/// Convenience function to create a Tag parser
///
/// ```
/// use retrace::{ByteCursor, Cursor, Parser, tag};
///
/// let cursor = ByteCursor::new(b"truer");
/// let (matched, cursor) = tag(b"true").parse(cursor).unwrap();
/// assert_eq!(matched, b"true");
/// assert_eq!(cursor.remaining(), b"r");
/// ```
pub fn tag<T: Atomic>(expected: impl AsRef<[T]>) -> Tag<T> {
    Tag::new(expected)
}
