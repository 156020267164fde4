use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// This is the heterogeneous, fixed-arity form of [`sequence`](crate::sequence::sequence).
/// When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nested
/// shape is explicit about parsing order and needs no per-arity code.
///
/// Example:
/// ```
/// use retrace::and::AndExt;
/// use retrace::or::OrExt;
/// use retrace::{ByteCursor, Cursor, Parser, literal, one_or_more};
///
/// let cursor = ByteCursor::new(b"12.5");
/// let (((whole, dot), fraction), cursor) = one_or_more(literal(b'1').or(literal(b'2')))
///     .and(literal(b'.'))
///     .and(literal(b'5'))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(whole, b"12");
/// assert_eq!(dot, b'.');
/// assert_eq!(fraction, b'5');
/// assert!(cursor.eos());
/// ```
#[derive(Debug, Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
