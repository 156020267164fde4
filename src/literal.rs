use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches one specific element
#[derive(Debug, Clone, Copy)]
pub struct Literal<T> {
    expected: T,
}

impl<T: Atomic> Literal<T> {
    pub fn new(expected: T) -> Self {
        Literal { expected }
    }
}

impl<'code, T: Atomic> Parser<'code> for Literal<T> {
    type Cursor = AtomicCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match cursor.value()? {
            found if found == self.expected => Ok((found, cursor.next())),
            found => Err(ParseError::UnexpectedElement {
                expected: self.expected,
                found,
                loc: cursor.loc(),
            }),
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal<T: Atomic>(expected: T) -> Literal<T> {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{ByteCursor, CharCursor};

    #[test]
    fn test_literal_success() {
        let data = b"c";
        let cursor = ByteCursor::new(data);

        let (value, cursor) = literal(b'c').parse(cursor).unwrap();
        assert_eq!(value, b'c');
        assert_eq!(cursor.position(), 1);
        assert!(cursor.eos());
    }

    #[test]
    fn test_literal_consumes_exactly_one() {
        let data = b"ccc";
        let cursor = ByteCursor::new(data);

        let (_, cursor) = literal(b'c').parse(cursor).unwrap();
        assert_eq!(cursor.remaining(), b"cc");
    }

    #[test]
    fn test_literal_mismatch() {
        let data = b"world";
        let cursor = ByteCursor::new(data);

        let error = literal(b'h').parse(cursor).unwrap_err();
        match error {
            ParseError::UnexpectedElement {
                expected,
                found,
                loc,
            } => {
                assert_eq!(expected, b'h');
                assert_eq!(found, b'w');
                assert_eq!(loc.position(), 0);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(
            literal(b'h')
                .parse(cursor)
                .unwrap_err()
                .to_string()
                .contains("expected 'h', found 'w'")
        );
    }

    #[test]
    fn test_literal_end_of_input() {
        let data = b"";
        let cursor = ByteCursor::new(data);

        let result = literal(b'a').parse(cursor);
        assert!(matches!(result, Err(ParseError::EndOfInput { .. })));
    }

    #[test]
    fn test_literal_after_last_element() {
        let data = b"a";
        let (_, cursor) = literal(b'a').parse(ByteCursor::new(data)).unwrap();

        let error = literal(b'a').parse(cursor).unwrap_err();
        assert!(matches!(error, ParseError::EndOfInput { .. }));
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_literal_over_chars() {
        let data: Vec<char> = "ünï".chars().collect();
        let cursor = CharCursor::new(&data);

        let (value, cursor) = literal('ü').parse(cursor).unwrap();
        assert_eq!(value, 'ü');
        assert_eq!(cursor.value().unwrap(), 'n');
    }

    #[test]
    fn test_literal_non_printable_diagnostics() {
        let data = &[0xFF, 0xFE];
        let cursor = ByteCursor::new(data);

        let error = literal(0xAA).parse(cursor).unwrap_err();
        assert!(error.to_string().contains("expected 0xAA, found 0xFF"));
    }
}
