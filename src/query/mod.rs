//! Path query language
//!
//! A query such as `users[0].address.city` addresses a node in a JSON document. This module
//! holds the whole query pipeline, each stage a pure function of its inputs:
//!
//! - **Tokenizer**: raw text and separator to a [`Path`] of [`Token`]s
//! - **Resolver**: walks a path against a [`Document`], reporting how far it got
//! - **Completion**: candidates and an inline suggestion for the token being typed
//! - **QueryState**: editable text and cursor, re-tokenized after every edit
//!
//! None of these stages can fail. Malformed input becomes error tokens and unmatched paths
//! become partial resolutions, so an interactive caller can keep accepting keystrokes.
//!
//! # Examples
//!
//! ```
//! use jnav::query::{Token, completions, resolve, tokenize};
//! use serde_json::json;
//!
//! let doc = json!({"users": [{"name": "ada", "nick": "countess"}]});
//! let path = tokenize("users[0].n", '.').path;
//! assert_eq!(path[1], Token::Index(0));
//!
//! let res = resolve(&doc, &path);
//! assert!(!res.fully_resolved);
//! assert_eq!(completions(res.node, &path), vec!["name", "nick"]);
//! ```

mod completion;
mod resolver;
mod state;
mod token;
mod tokenizer;

pub use completion::{best_completion, completions};
pub use resolver::{Document, Resolution, resolve};
pub use state::QueryState;
pub use token::{Path, Token};
pub use tokenizer::{
    Bracket, DEFAULT_SEPARATOR, ESCAPE, OPEN_BRACKET, Tokenized, escape, parse_bracket,
    serialize, tokenize,
};
