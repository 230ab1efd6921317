//! Path segment model
//!
//! A query is tokenized into a [`Path`]: an ordered list of [`Token`]s describing a
//! descent from the document root. Only the last token of a path may be an error
//! variant; everything before it parsed successfully.

use std::fmt;

/// A single path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Object field name (may be empty, e.g. at the start of input or after a separator)
    Key(String),
    /// Array index, as in `[3]`
    Index(usize),
    /// Reserved wildcard marker, currently only `[*]`
    Wildcard(String),
    /// Malformed trailing key segment, e.g. text glued to a closing bracket
    ErrKey(String),
    /// Bracket segment that is not (yet) a valid index, e.g. `[1` while typing
    ErrIndex(String),
}

/// Ordered root-to-leaf sequence of tokens. Never empty once produced by the tokenizer.
pub type Path = Vec<Token>;

impl Token {
    /// Key with the given text
    pub fn key(text: impl Into<String>) -> Self {
        Token::Key(text.into())
    }

    /// Text the user has already typed for this segment, if completion can extend it.
    ///
    /// Only `Key` and `ErrIndex` tokens are extendable; every other kind returns `None`.
    pub fn typed_text(&self) -> Option<&str> {
        match self {
            Token::Key(text) | Token::ErrIndex(text) => Some(text),
            Token::Index(_) | Token::Wildcard(_) | Token::ErrKey(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Key(text) | Token::ErrKey(text) => write!(f, "{text}"),
            Token::Index(index) => write!(f, "[{index}]"),
            Token::Wildcard(form) | Token::ErrIndex(form) => write!(f, "{form}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_text() {
        assert_eq!(Token::key("ab").typed_text(), Some("ab"));
        assert_eq!(Token::ErrIndex("[1".into()).typed_text(), Some("[1"));
        assert_eq!(Token::Index(4).typed_text(), None);
        assert_eq!(Token::ErrKey("zz".into()).typed_text(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Index(12).to_string(), "[12]");
        assert_eq!(Token::key("name").to_string(), "name");
        assert_eq!(Token::Wildcard("[*]".into()).to_string(), "[*]");
    }
}
