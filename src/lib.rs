//! jnav Library
//!
//! This library provides the core of jnav, an interactive JSON navigator. The query
//! pipeline (tokenize, resolve, complete) is independent of the terminal and can be used
//! on its own.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `explorer`: Interactive session state over one document
//! - `formatter`: Output formatting and display
//! - `query`: Query tokenizer, resolver and completion engine
//! - `repl`: Full-screen terminal front-end
//!
//! # Example
//!
//! ```
//! use jnav::Explorer;
//! use serde_json::json;
//!
//! let doc = json!({"servers": [{"host": "a"}, {"host": "b"}]});
//! let mut explorer = Explorer::new(&doc, '.');
//! let node = explorer.execute("servers[1].host").unwrap();
//! assert_eq!(node, &json!("b"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod explorer;
pub mod formatter;
pub mod query;
pub mod repl;

// Re-export commonly used types
pub use config::Config;
pub use error::{JnavError, Result};
pub use explorer::{Accept, Explorer, View};
pub use formatter::Formatter;
pub use query::{QueryState, Token, tokenize};
pub use repl::ExplorerUi;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
