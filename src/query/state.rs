//! Editable query text with an always-current parsed path

use super::token::{Path, Token};
use super::tokenizer::{escape, tokenize};

/// Raw query text, cursor and the path derived from them
///
/// Every mutation re-tokenizes the whole text, so [`QueryState::path`] and
/// [`QueryState::trailing_escape`] never lag behind [`QueryState::raw`]. The cursor is a
/// code-point offset in `0..=len`.
#[derive(Debug, Clone)]
pub struct QueryState {
    raw: String,
    cursor: usize,
    separator: char,
    path: Path,
    trailing_escape: bool,
}

impl QueryState {
    /// Empty query using `separator` between keys
    pub fn new(separator: char) -> Self {
        let mut state = Self {
            raw: String::new(),
            cursor: 0,
            separator,
            path: Vec::new(),
            trailing_escape: false,
        };
        state.reparse();
        state
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn path(&self) -> &[Token] {
        &self.path
    }

    pub fn trailing_escape(&self) -> bool {
        self.trailing_escape
    }

    /// Last token of the path (the one being typed)
    pub fn last_token(&self) -> &Token {
        // The tokenizer never yields an empty path
        match self.path.last() {
            Some(token) => token,
            None => &EMPTY_KEY,
        }
    }

    /// Length of the raw text in code points
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Replace the whole text; the cursor is kept but clamped to the new length
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        self.cursor = self.cursor.min(self.len());
        self.reparse();
    }

    /// Insert `ch` at the cursor and move past it
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.raw.insert(at, ch);
        self.cursor += 1;
        self.reparse();
    }

    /// Delete the character before the cursor (backspace); no-op at the start
    pub fn delete_char_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.raw.remove(at);
        self.cursor -= 1;
        self.reparse();
    }

    /// Drop everything before the cursor; the cursor moves to the start
    pub fn truncate_before_cursor(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.raw.replace_range(..at, "");
        self.cursor = 0;
        self.reparse();
    }

    /// Drop everything from the cursor to the end
    pub fn truncate_after_cursor(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.raw.truncate(at);
        self.reparse();
    }

    /// Move the cursor one character left; returns false at the start
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one character right; returns false at the end
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Append the untyped part of `candidate`, escaped, and move the cursor to the end
    ///
    /// A pending trailing escape swallows the first appended character as-is.
    pub fn complete_with(&mut self, candidate: &str) {
        let suffix = match self.last_token().typed_text() {
            Some(typed) => candidate.strip_prefix(typed).unwrap_or(candidate),
            None => "",
        };

        let mut appended = String::with_capacity(suffix.len() * 2);
        let mut chars = suffix.chars();
        if self.trailing_escape
            && let Some(first) = chars.next()
        {
            appended.push(first);
        }
        appended.push_str(&escape(chars.as_str(), self.separator));

        self.raw.push_str(&appended);
        self.cursor = self.len();
        self.reparse();
    }

    fn reparse(&mut self) {
        let tokenized = tokenize(&self.raw, self.separator);
        self.path = tokenized.path;
        self.trailing_escape = tokenized.trailing_escape;
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.raw
            .char_indices()
            .nth(cursor)
            .map_or(self.raw.len(), |(offset, _)| offset)
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(super::tokenizer::DEFAULT_SEPARATOR)
    }
}

static EMPTY_KEY: Token = Token::Key(String::new());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty_key() {
        let state = QueryState::new('.');
        assert_eq!(state.path(), &[Token::key("")]);
        assert!(!state.trailing_escape());
        assert_eq!(state.cursor(), 0);
        assert!(state.is_empty());
    }

    #[test]
    fn test_insert_and_delete() {
        let mut state = QueryState::new('.');
        for ch in "ab.c".chars() {
            state.insert_char(ch);
        }
        assert_eq!(state.raw(), "ab.c");
        assert_eq!(state.cursor(), 4);
        assert_eq!(state.path(), &[Token::key("ab"), Token::key("c")]);

        state.move_left();
        state.move_left();
        state.insert_char('x');
        assert_eq!(state.raw(), "abx.c");
        assert_eq!(state.cursor(), 3);

        state.delete_char_before_cursor();
        state.delete_char_before_cursor();
        assert_eq!(state.raw(), "a.c");
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.path(), &[Token::key("a"), Token::key("c")]);
    }

    #[test]
    fn test_delete_at_start_is_noop() {
        let mut state = QueryState::new('.');
        state.set_raw("abc");
        state.move_home();
        state.delete_char_before_cursor();
        assert_eq!(state.raw(), "abc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = QueryState::new('.');
        state.set_raw("ü");
        state.move_end();
        state.insert_char('é');
        assert_eq!(state.raw(), "üé");
        assert_eq!(state.len(), 2);
        state.move_left();
        state.delete_char_before_cursor();
        assert_eq!(state.raw(), "é");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_truncation() {
        let mut state = QueryState::new('.');
        state.set_raw("abc.def");
        state.move_home();
        state.move_right();
        state.move_right();
        state.move_right();

        let mut before = state.clone();
        before.truncate_before_cursor();
        assert_eq!(before.raw(), ".def");
        assert_eq!(before.cursor(), 0);
        assert_eq!(before.path(), &[Token::key(""), Token::key("def")]);

        state.truncate_after_cursor();
        assert_eq!(state.raw(), "abc");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = QueryState::new('.');
        state.set_raw("ab");
        state.move_end();
        assert!(!state.move_right());
        assert!(state.move_left());
        state.move_home();
        assert!(!state.move_left());

        state.move_end();
        state.set_raw("x");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_complete_with_pending_escape() {
        let mut state = QueryState::new('.');
        state.set_raw(r"key\");
        state.complete_with(r"\end.");
        assert_eq!(state.raw(), r"key\\end\.");
        assert_eq!(state.cursor(), state.len());
    }

    #[test]
    fn test_complete_without_pending_escape() {
        let mut state = QueryState::new('.');
        state.set_raw("key");
        state.complete_with(r"\end");
        assert_eq!(state.raw(), r"key\\end");
    }

    #[test]
    fn test_complete_key_prefix() {
        let mut state = QueryState::new('.');
        state.set_raw("user.na");
        state.complete_with("name.first");
        assert_eq!(state.raw(), r"user.name\.first");
        assert_eq!(
            state.path(),
            &[Token::key("user"), Token::key("name.first")]
        );
        assert!(!state.trailing_escape());
    }

    #[test]
    fn test_complete_unfinished_index() {
        let mut state = QueryState::new('.');
        state.set_raw("list[1");
        state.complete_with("[1]");
        assert_eq!(state.raw(), "list[1]");
        assert_eq!(state.path(), &[Token::key("list"), Token::Index(1)]);
    }

    #[test]
    fn test_complete_after_resolved_index_appends_nothing() {
        let mut state = QueryState::new('.');
        state.set_raw("list[1]");
        state.complete_with("anything");
        assert_eq!(state.raw(), "list[1]");
    }
}
