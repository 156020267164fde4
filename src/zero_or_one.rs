use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the value and the advanced cursor when the inner parser
/// succeeds, or `None` with the original cursor when it fails. Never fails
/// itself.
///
/// Example:
/// ```
/// use retrace::{ByteCursor, Cursor, Parser, literal, zero_or_one};
///
/// let sign = zero_or_one(literal(b'-'));
///
/// let (value, cursor) = sign.parse(ByteCursor::new(b"-1")).unwrap();
/// assert_eq!(value, Some(b'-'));
/// assert_eq!(cursor.position(), 1);
///
/// let (value, cursor) = sign.parse(ByteCursor::new(b"1")).unwrap();
/// assert_eq!(value, None);
/// assert_eq!(cursor.position(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroOrOne<P> {
    parser: P,
}

impl<P> ZeroOrOne<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrOne { parser }
    }
}

impl<'code, P> Parser<'code> for ZeroOrOne<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create a ZeroOrOne parser
pub fn zero_or_one<'code, P>(parser: P) -> ZeroOrOne<P>
where
    P: Parser<'code>,
{
    ZeroOrOne::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::literal::literal;
    use crate::sequence::sequence;
    use crate::tag::tag;

    #[test]
    fn test_absent() {
        let data = b"s";
        let cursor = ByteCursor::new(data);
        let parser = zero_or_one(literal(b'b'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.remaining(), b"s");
    }

    #[test]
    fn test_present() {
        let data = b"bs";
        let cursor = ByteCursor::new(data);
        let parser = zero_or_one(literal(b'b'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, Some(b'b'));
        assert_eq!(cursor.remaining(), b"s");
    }

    #[test]
    fn test_absent_at_end_of_input() {
        let data = b"";
        let cursor = ByteCursor::new(data);
        let parser = zero_or_one(literal(b'b'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, None);
        assert!(cursor.eos());
    }

    #[test]
    fn test_partial_inner_match_is_rolled_back() {
        let data = b"char";
        let cursor = ByteCursor::new(data);
        let parser = zero_or_one(sequence([
            literal(b'c'),
            literal(b'h'),
            literal(b'a'),
            literal(b'x'),
        ]));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.position(), 0);

        let (matched, _) = tag(b"char").parse(cursor).unwrap();
        assert_eq!(matched, b"char");
    }
}
