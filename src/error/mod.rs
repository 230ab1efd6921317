//! Error handling for jnav.
//!
//! The query pipeline itself is infallible: malformed input turns into error tokens and
//! unmatched paths into partial resolutions. The types here cover the edges of the tool:
//! - Usage errors from the one-shot query mode and the command line
//! - Configuration loading and validation
//! - Reading and parsing the input document
//!
//! # Example
//!
//! ```rust
//! use jnav::error::{JnavError, Result, UsageError};
//!
//! fn check(resolved: bool) -> Result<()> {
//!     if !resolved {
//!         return Err(UsageError::BadQuery {
//!             query: "a.b".into(),
//!             token: "b".into(),
//!         }
//!         .into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(check(false), Err(JnavError::Usage(_))));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, JnavError, Result, UsageError};
