/// Trait for atomic elements that can be used in parsing
/// This enables generic error formatting and position calculation
pub trait Atomic:
    Copy + Clone + PartialEq + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// The newline character/element for this atomic type
    const NEWLINE: Self;

    /// Render a single element for diagnostics
    fn describe(self) -> String;

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String;

    fn is_newline(&self) -> bool {
        *self == Self::NEWLINE
    }
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn describe(self) -> String {
        if self.is_ascii_graphic() || self == b' ' {
            format!("'{}'", self as char)
        } else {
            format!("0x{:02X}", self)
        }
    }

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).into_owned()
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn describe(self) -> String {
        format!("{:?}", self)
    }

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

impl Atomic for u32 {
    const NEWLINE: Self = 0x0A;

    fn describe(self) -> String {
        self.to_string()
    }

    fn format_slice(slice: &[Self]) -> String {
        slice
            .iter()
            .map(|element| element.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_printable_byte() {
        assert_eq!(b'a'.describe(), "'a'");
        assert_eq!(b' '.describe(), "' '");
    }

    #[test]
    fn test_describe_control_byte() {
        assert_eq!(b'\n'.describe(), "0x0A");
        assert_eq!(0xFFu8.describe(), "0xFF");
    }

    #[test]
    fn test_format_slices() {
        assert_eq!(u8::format_slice(b"ab\ncd"), "ab\ncd");
        assert_eq!(char::format_slice(&['h', 'é']), "hé");
        assert_eq!(u32::format_slice(&[1, 2, 3]), "1 2 3");
    }

    #[test]
    fn test_newline() {
        assert!(b'\n'.is_newline());
        assert!('\n'.is_newline());
        assert!(!0u32.is_newline());
    }
}
