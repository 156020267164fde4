use crate::atomic::Atomic;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Boxed error produced by a semantic action that rejects a match
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

/// A location in the input: the full source plus an absolute element offset
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CodeLoc<'code, T: Atomic = u8> {
    code: &'code [T],
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn source(&self) -> &'code [T] {
        self.code
    }

    /// Calculate line number and element offset within that line
    ///
    /// We return element offset instead of column number because column
    /// calculation depends on encoding and rendering (tabs, wide and
    /// zero-width characters). Element offset within the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.code.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.loc - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        let mut push_line = |number: usize, content: &[T]| {
            if number < first || number > last {
                return;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, T::format_slice(content)));
            if number == pos.line {
                lines.push(format!(
                    "{}^--- here",
                    " ".repeat(prefix.len() + pos.offset)
                ));
            }
        };

        let mut number = 1;
        let mut line_start = 0;
        for (i, element) in self.code.iter().enumerate() {
            if element.is_newline() {
                push_line(number, &self.code[line_start..i]);
                number += 1;
                line_start = i + 1;
            }
        }

        // Last line has no trailing newline, or the error sits just past one
        if line_start < self.code.len() || number == pos.line {
            push_line(number, &self.code[line_start..]);
        }

        lines
    }
}

impl<'code, T: Atomic> fmt::Display for CodeLoc<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(
            f,
            "line {}, offset {} (absolute position: {})",
            pos.line, pos.offset, self.loc
        )
    }
}

/// Failure of a single parse attempt
///
/// A failed attempt never consumes input: the caller still holds the cursor
/// it passed in, so every variant only describes *why* and *where*.
#[derive(Debug, Error)]
pub enum ParseError<'code, T: Atomic = u8> {
    /// An element was required but the input was exhausted
    #[error("unexpected end of input at {loc}")]
    EndOfInput { loc: CodeLoc<'code, T> },

    /// An element was present but did not match
    #[error("expected {}, found {} at {loc}", .expected.describe(), .found.describe())]
    UnexpectedElement {
        expected: T,
        found: T,
        loc: CodeLoc<'code, T>,
    },

    /// Every branch of an ordered choice failed
    #[error("no alternative matched at {loc} ({} tried)", .causes.len())]
    NoAlternativeMatched {
        causes: Vec<ParseError<'code, T>>,
        loc: CodeLoc<'code, T>,
    },

    /// A semantic action rejected a structurally valid match
    #[error("rejected at {loc}: {message}")]
    SemanticRejection {
        message: Cow<'static, str>,
        source: Option<BoxError>,
        loc: CodeLoc<'code, T>,
    },

    /// Failure of a parser that was given a name
    #[error("{name}: {}", .inner.as_ref() as &dyn fmt::Display)]
    Named {
        name: Cow<'static, str>,
        inner: Box<ParseError<'code, T>>,
    },

    /// A complete parse left input behind
    #[error("unconsumed input at {loc}")]
    TrailingInput { loc: CodeLoc<'code, T> },
}

impl<'code, T: Atomic> ParseError<'code, T> {
    pub(crate) fn rejected(
        message: impl Into<Cow<'static, str>>,
        source: Option<BoxError>,
        loc: CodeLoc<'code, T>,
    ) -> Self {
        ParseError::SemanticRejection {
            message: message.into(),
            source,
            loc,
        }
    }

    /// Where the attempt that produced this error started or stopped
    pub fn loc(&self) -> CodeLoc<'code, T> {
        match self {
            ParseError::EndOfInput { loc }
            | ParseError::UnexpectedElement { loc, .. }
            | ParseError::NoAlternativeMatched { loc, .. }
            | ParseError::SemanticRejection { loc, .. }
            | ParseError::TrailingInput { loc } => *loc,
            ParseError::Named { inner, .. } => inner.loc(),
        }
    }

    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// The element that was expected, when this error is about a single element
    pub fn expected(&self) -> Option<T> {
        match self {
            ParseError::UnexpectedElement { expected, .. } => Some(*expected),
            ParseError::Named { inner, .. } => inner.expected(),
            _ => None,
        }
    }

    /// Select the error that made it furthest into the input
    ///
    /// Ordered choice reports where it started; the branch that progressed
    /// furthest is usually the one the author meant. Ties keep the earlier
    /// branch.
    pub fn furthest(&self) -> &ParseError<'code, T> {
        match self {
            ParseError::NoAlternativeMatched { causes, .. } => {
                let mut best: Option<&ParseError<'code, T>> = None;
                for cause in causes.iter().map(ParseError::furthest) {
                    match best {
                        Some(current) if current.position() >= cause.position() => {}
                        _ => best = Some(cause),
                    }
                }
                best.unwrap_or(self)
            }
            ParseError::Named { inner, .. } => inner.furthest(),
            _ => self,
        }
    }

    /// Render this error with surrounding context lines
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let furthest = self.furthest();
        if !std::ptr::eq(furthest, self) {
            out.push_str(&format!("\nfurthest failure: {}", furthest));
        }
        out.push('\n');
        for line in furthest.loc().context_lines() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}
