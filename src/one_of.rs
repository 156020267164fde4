use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Ordered choice over any number of parsers with the same output
///
/// Each alternative is tried from the cursor the choice received, in list
/// order, and the first success is returned unchanged. If every alternative
/// fails, all of their errors are kept for diagnostics.
#[derive(Debug, Clone)]
pub struct OneOf<P> {
    alternatives: Vec<P>,
}

impl<P> OneOf<P> {
    pub fn new(alternatives: Vec<P>) -> Self {
        OneOf { alternatives }
    }
}

impl<'code, P> Parser<'code> for OneOf<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut causes = Vec::with_capacity(self.alternatives.len());

        for alternative in &self.alternatives {
            match alternative.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(error) => causes.push(error),
            }
        }

        Err(ParseError::NoAlternativeMatched {
            causes,
            loc: cursor.loc(),
        })
    }
}

/// Convenience function to create a OneOf parser
///
/// ```
/// use retrace::{ByteCursor, Cursor, Parser, literal, one_of};
///
/// let digit = one_of((b'0'..=b'9').map(literal));
/// let (value, cursor) = digit.parse(ByteCursor::new(b"7x")).unwrap();
/// assert_eq!(value, b'7');
/// assert_eq!(cursor.remaining(), b"x");
/// ```
pub fn one_of<'code, P>(alternatives: impl IntoIterator<Item = P>) -> OneOf<P>
where
    P: Parser<'code>,
{
    OneOf::new(alternatives.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::tag::tag;

    #[test]
    fn test_first_alternative_wins() {
        let data = b"truer";
        let cursor = ByteCursor::new(data);
        let parser = one_of([tag(b"truer"), tag(b"true")]);

        let (matched, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched, b"truer");
        assert!(cursor.eos());
    }

    #[test]
    fn test_order_decides_not_length() {
        let data = b"truer";
        let cursor = ByteCursor::new(data);
        let parser = one_of([tag(b"true"), tag(b"truer")]);

        let (matched, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched, b"true");
        assert_eq!(cursor.remaining(), b"r");
    }

    #[test]
    fn test_keywords_to_bool() {
        let data = b"false";
        let cursor = ByteCursor::new(data);
        let parser = one_of([tag(b"true"), tag(b"false")]).map(|word| word == b"true");

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert!(!value);
        assert!(cursor.eos());
    }

    #[test]
    fn test_failed_alternatives_do_not_accumulate() {
        let data = b"abd";
        let cursor = ByteCursor::new(data);
        // Each failing branch consumes a prefix before mismatching
        let parser = one_of([tag(b"abc"), tag(b"ab!"), tag(b"abd")]);

        let (matched, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched, b"abd");
        assert!(cursor.eos());
    }

    #[test]
    fn test_all_fail_reports_every_cause() {
        let data = b"z";
        let cursor = ByteCursor::new(data);
        let parser = one_of((b'0'..=b'9').map(literal));

        match parser.parse(cursor).unwrap_err() {
            ParseError::NoAlternativeMatched { causes, loc } => {
                assert_eq!(causes.len(), 10);
                assert_eq!(loc.position(), 0);
                assert!(causes.iter().all(|cause| matches!(
                    cause,
                    ParseError::UnexpectedElement { found: b'z', .. }
                )));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_end_of_input_causes() {
        let data = b"";
        let cursor = ByteCursor::new(data);
        let parser = one_of([literal(b'a'), literal(b'b')]);

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().contains("no alternative matched"));
        assert!(matches!(error.furthest(), ParseError::EndOfInput { .. }));
    }

    #[test]
    fn test_no_alternatives_always_fails() {
        let data = b"a";
        let cursor = ByteCursor::new(data);
        let parser = one_of(Vec::<crate::literal::Literal<u8>>::new());

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(
            error,
            ParseError::NoAlternativeMatched { ref causes, .. } if causes.is_empty()
        ));
    }
}
