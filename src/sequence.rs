use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a list of parsers in order and collects their values
///
/// All parsers share one output type; use [`and`](crate::and::and) or
/// [`boxed`](crate::parser::BoxedExt::boxed) when the shapes differ. The first
/// failure is returned as-is and the caller keeps its pre-sequence cursor.
#[derive(Debug, Clone)]
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser<'code>,
{
    Sequence::new(parsers.into_iter().collect())
}
