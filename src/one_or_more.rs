use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::zero_or_more::repeat;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// If the first attempt fails, its error is returned unchanged.
#[derive(Debug, Clone)]
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<'code, P> Parser<'code> for OneOrMore<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        // First parse must succeed
        let (first_value, next_cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        if next_cursor.position() == cursor.position() {
            return Ok((results, next_cursor));
        }

        let cursor = repeat(&self.parser, next_cursor, &mut results);

        Ok((results, cursor))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<'code, P>(parser: P) -> OneOrMore<P>
where
    P: Parser<'code>,
{
    OneOrMore::new(parser)
}
