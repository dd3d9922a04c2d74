use serde::{Deserialize, Serialize};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    /// Character index within the line, not display width
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position just after the last character of `content`
    pub fn end_of(content: &str) -> Self {
        let line = content.matches('\n').count();
        let column = content
            .rsplit('\n')
            .next()
            .map(|last| last.chars().count())
            .unwrap_or(0);
        Self { line, column }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_end_of_empty() {
        assert_eq!(CursorPosition::end_of(""), CursorPosition::new(0, 0));
    }

    #[test]
    fn test_end_of_multiline() {
        assert_eq!(
            CursorPosition::end_of("Hello\nこんにちは"),
            CursorPosition::new(1, 5)
        );
    }

    #[test]
    fn test_end_of_trailing_newline() {
        assert_eq!(CursorPosition::end_of("abc\n"), CursorPosition::new(1, 0));
    }
}
