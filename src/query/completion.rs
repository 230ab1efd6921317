//! Completion candidates for partially typed paths
//!
//! Works on the output of [`resolve`](super::resolver::resolve): the container node the
//! resolver stopped at and the path whose last token is being typed.

use super::resolver::Document;
use super::token::Token;

/// Candidates that extend the last token of `path` within `container`
///
/// - an unfinished bracket (`ErrIndex`) is offered closed with the digits typed so far
/// - a key prefix is matched against the container's field names, sorted ascending
/// - any other last token has nothing to complete
pub fn completions<D: Document + ?Sized>(container: Option<&D>, path: &[Token]) -> Vec<String> {
    let Some(container) = container else {
        return Vec::new();
    };
    let Some(last) = path.last() else {
        return Vec::new();
    };

    match last {
        Token::ErrIndex(text) => vec![format!("[{}]", first_digit_run(text))],
        Token::Key(prefix) => {
            let Some(names) = container.field_names() else {
                return Vec::new();
            };
            let mut matches: Vec<String> = names
                .into_iter()
                .filter(|name| name.starts_with(prefix.as_str()))
                .map(str::to_string)
                .collect();
            matches.sort();
            matches
        }
        Token::Index(_) | Token::Wildcard(_) | Token::ErrKey(_) => Vec::new(),
    }
}

/// Inline suggestion: the first candidate minus what has already been typed
pub fn best_completion(last: &Token, candidates: &[String]) -> String {
    let Some(first) = candidates.first() else {
        return String::new();
    };
    match last.typed_text() {
        Some(typed) => first.strip_prefix(typed).unwrap_or(first).to_string(),
        None => String::new(),
    }
}

fn first_digit_run(text: &str) -> &str {
    let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
        return "";
    };
    let rest = &text[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    &rest[..len]
}
