//! Query tokenizer
//!
//! Turns raw query text such as `users[3].address.city` into a [`Path`].
//!
//! # Design Principles
//!
//! - **Never panic, never reject** - malformed input becomes `ErrKey`/`ErrIndex` tokens
//! - **Stop at the first failure** - the failing token is always the last one
//! - **Tolerate live typing** - `key[1` while typing `key[12]` is data, not an error
//!
//! Structural characters (the separator, `[` and the escape marker itself) can be used
//! inside keys by prefixing them with a backslash.

use std::mem;

use super::token::{Path, Token};

/// Escape marker
pub const ESCAPE: char = '\\';

/// Opening bracket of an index segment
pub const OPEN_BRACKET: char = '[';

/// Default key separator
pub const DEFAULT_SEPARATOR: char = '.';

const WILDCARD_BRACKET: [char; 3] = ['[', '*', ']'];

/// Result of tokenizing a raw query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    /// Parsed path, never empty
    pub path: Path,
    /// The raw text ends with an escape marker that has not consumed a character yet
    pub trailing_escape: bool,
}

/// Outcome of parsing a bracket segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bracket {
    /// Valid segment and the number of characters it spans
    Parsed { token: Token, len: usize },
    /// Invalid segment; the token covers the whole remainder of the input
    Failed(Token),
}

/// Tokenize `raw` using `sep` as the key separator
pub fn tokenize(raw: &str, sep: char) -> Tokenized {
    let input: Vec<char> = raw.chars().collect();
    let mut tokens = Vec::new();
    let mut current = empty_key();
    let mut in_escape = false;
    let mut pos = 0;

    while pos < input.len() {
        let ch = input[pos];

        if in_escape {
            in_escape = false;
        } else if ch == ESCAPE {
            in_escape = true;
            pos += 1;
            continue;
        } else if ch == sep {
            tokens.push(mem::replace(&mut current, empty_key()));
            pos += 1;
            continue;
        } else if ch == OPEN_BRACKET {
            tokens.push(mem::replace(&mut current, empty_key()));
            match parse_bracket(&input[pos..]) {
                Bracket::Parsed { token, len } => {
                    current = token;
                    pos += len;
                    continue;
                }
                Bracket::Failed(token) => {
                    tokens.push(token);
                    return Tokenized {
                        path: tokens,
                        trailing_escape: false,
                    };
                }
            }
        }

        // Literal character
        match current {
            Token::Key(ref mut text) => text.push(ch),
            pending => {
                // A closed bracket followed by text without a separator
                tokens.push(pending);
                tokens.push(Token::ErrKey(input[pos..].iter().collect()));
                return Tokenized {
                    path: tokens,
                    trailing_escape: false,
                };
            }
        }
        pos += 1;
    }

    tokens.push(current);
    Tokenized {
        path: tokens,
        trailing_escape: in_escape,
    }
}

/// Parse a bracket segment at the start of `rest` (which begins with `[`)
///
/// Accepts `[*]` and `[N]` where `N` is `0` or a number without leading zeros.
pub fn parse_bracket(rest: &[char]) -> Bracket {
    if rest.starts_with(&WILDCARD_BRACKET) {
        return Bracket::Parsed {
            token: Token::Wildcard(WILDCARD_BRACKET.iter().collect()),
            len: WILDCARD_BRACKET.len(),
        };
    }

    let failed = || Bracket::Failed(Token::ErrIndex(rest.iter().collect()));

    if rest.first() != Some(&OPEN_BRACKET) {
        return failed();
    }

    let digits_len = match rest.get(1) {
        Some('0') => 1,
        Some('1'..='9') => rest[1..].iter().take_while(|c| c.is_ascii_digit()).count(),
        _ => return failed(),
    };
    let close = 1 + digits_len;
    if rest.get(close) != Some(&']') {
        return failed();
    }

    let digits: String = rest[1..close].iter().collect();
    match digits.parse::<usize>() {
        Ok(index) => Bracket::Parsed {
            token: Token::Index(index),
            len: close + 1,
        },
        // Syntactically an index, but too large to address anything
        Err(_) => failed(),
    }
}

/// Escape every escape marker, separator and `[` in `text` with one extra escape marker
pub fn escape(text: &str, sep: char) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if needs_escape(ch, sep) {
            escaped.push(ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Render a path back into query text
///
/// Keys are escaped and joined by `sep`; bracket tokens attach to the preceding segment.
/// For any path produced from input without errors, `tokenize(serialize(p)) == p`.
pub fn serialize(path: &[Token], sep: char) -> String {
    let mut raw = String::new();
    for (i, token) in path.iter().enumerate() {
        match token {
            Token::Key(text) => {
                if i > 0 {
                    raw.push(sep);
                }
                raw.push_str(&escape(text, sep));
            }
            Token::Index(index) => raw.push_str(&format!("[{index}]")),
            Token::Wildcard(form) | Token::ErrIndex(form) | Token::ErrKey(form) => {
                raw.push_str(form)
            }
        }
    }
    raw
}

fn needs_escape(ch: char, sep: char) -> bool {
    ch == ESCAPE || ch == sep || ch == OPEN_BRACKET
}

fn empty_key() -> Token {
    Token::Key(String::new())
}
