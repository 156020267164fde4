use crate::cursor::Cursor;
use crate::error::{BoxError, ParseError};
use crate::parser::{ParseResult, Parser};

/// Semantic action: apply a fallible function to a parser's output
///
/// If the inner parser fails, its error is returned unchanged. If the
/// function rejects the value, the whole match is discarded and the error
/// points at where the inner parser *started*, so the input it consumed is
/// available again to whatever the caller tries next.
pub struct Transform<P, F> {
    parser: P,
    function: F,
}

impl<P, F> Transform<P, F> {
    pub fn new(parser: P, function: F) -> Self {
        Transform { parser, function }
    }
}

impl<'code, P, F, T, U, E> Parser<'code> for Transform<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (value, next_cursor) = self.parser.parse(cursor)?;
        match (self.function)(value) {
            Ok(output) => Ok((output, next_cursor)),
            Err(error) => {
                let source: BoxError = error.into();
                Err(ParseError::rejected(
                    source.to_string(),
                    Some(source),
                    cursor.loc(),
                ))
            }
        }
    }
}

/// Convenience function to create a Transform parser
///
/// ```
/// use retrace::{BoxError, ByteCursor, Cursor, Parser, literal, one_of, one_or_more, transform};
///
/// let digits = one_or_more(one_of((b'0'..=b'9').map(literal)));
/// let small = transform(digits, |digits: Vec<u8>| -> Result<u32, BoxError> {
///     let value: u32 = String::from_utf8(digits)?.parse()?;
///     if value > 99 {
///         return Err(format!("{} is greater than 99", value).into());
///     }
///     Ok(value)
/// });
///
/// let (value, _) = small.parse(ByteCursor::new(b"42")).unwrap();
/// assert_eq!(value, 42);
///
/// let cursor = ByteCursor::new(b"123abc");
/// let error = small.parse(cursor).unwrap_err();
/// assert_eq!(error.position(), 0);
/// assert_eq!(cursor.remaining(), b"123abc");
/// ```
pub fn transform<'code, P, F, T, U, E>(parser: P, function: F) -> Transform<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> Result<U, E>,
    E: Into<BoxError>,
{
    Transform::new(parser, function)
}

/// Extension trait to add .transform() method support for parsers
pub trait TransformExt<'code>: Parser<'code> + Sized {
    fn transform<F, U, E>(self, function: F) -> Transform<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<BoxError>,
    {
        Transform::new(self, function)
    }
}

/// Implement TransformExt for all parsers
impl<'code, P> TransformExt<'code> for P where P: Parser<'code> {}
