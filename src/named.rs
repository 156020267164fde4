use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that attaches a name to a parser's failures
#[derive(Debug, Clone)]
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|inner| ParseError::Named {
                name: self.name.clone(),
                inner: Box::new(inner),
            })
    }
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

/// Implement NamedExt for all parsers
impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::literal::literal;

    #[test]
    fn test_named_success_is_transparent() {
        let data = b"c";
        let cursor = ByteCursor::new(data);
        let parser = literal(b'c').named("letter c");

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, b'c');
        assert!(cursor.eos());
        assert_eq!(parser.name(), "letter c");
    }

    #[test]
    fn test_named_failure_is_wrapped() {
        let data = b"x";
        let cursor = ByteCursor::new(data);
        let parser = literal(b'c').named(format!("letter {}", 'c'));

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(error, ParseError::Named { ref name, .. } if name == "letter c"));
        assert_eq!(error.expected(), Some(b'c'));
        assert!(error.to_string().starts_with("letter c: expected 'c', found 'x'"));
    }
}
