//! JSON line styling for the contents pane
//!
//! The contents pane shows pretty-printed JSON one (possibly truncated) line at a time, so
//! styling works per line and must cope with fragments: a string cut off at the screen
//! edge is still styled as a string.

use nu_ansi_term::{Color, Style};

/// Styles single lines of pretty-printed JSON
#[derive(Debug, Clone)]
pub struct JsonLineStyler {
    enabled: bool,
    key: Style,
    string: Style,
    punctuation: Style,
    null: Style,
}

impl JsonLineStyler {
    /// Create a styler; a disabled styler returns lines unchanged
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            key: Style::new().bold().fg(Color::Blue),
            string: Style::new().fg(Color::Green),
            punctuation: Style::new().bold(),
            null: Style::new().bold().fg(Color::DarkGray),
        }
    }

    /// Apply styles to one line
    pub fn style_line(&self, line: &str) -> String {
        if !self.enabled {
            return line.to_string();
        }

        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len() * 2);
        let mut pos = 0;

        while pos < chars.len() {
            let ch = chars[pos];
            match ch {
                '"' => {
                    let end = string_end(&chars, pos);
                    let text: String = chars[pos..end].iter().collect();
                    let style = if is_key(&chars, end) {
                        self.key
                    } else {
                        self.string
                    };
                    out.push_str(&style.paint(text).to_string());
                    pos = end;
                }
                '{' | '}' | '[' | ']' | ',' | ':' => {
                    out.push_str(&self.punctuation.paint(ch.to_string()).to_string());
                    pos += 1;
                }
                c if c.is_whitespace() => {
                    out.push(c);
                    pos += 1;
                }
                _ => {
                    let end = word_end(&chars, pos);
                    let word: String = chars[pos..end].iter().collect();
                    if word == "null" {
                        out.push_str(&self.null.paint(word).to_string());
                    } else {
                        out.push_str(&word);
                    }
                    pos = end;
                }
            }
        }

        out
    }
}

/// Index just past the closing quote of the string starting at `start`, or the line end
fn string_end(chars: &[char], start: usize) -> usize {
    let mut pos = start + 1;
    while pos < chars.len() {
        match chars[pos] {
            '\\' => pos += 2,
            '"' => return pos + 1,
            _ => pos += 1,
        }
    }
    chars.len()
}

fn word_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| c.is_whitespace() || matches!(c, '{' | '}' | '[' | ']' | ',' | ':' | '"'))
        .map_or(chars.len(), |len| start + len)
}

/// A string is a key when the next non-space character is a colon
fn is_key(chars: &[char], after: usize) -> bool {
    chars
        .iter()
        .skip(after)
        .find(|c| !c.is_whitespace())
        .is_some_and(|c| *c == ':')
}
