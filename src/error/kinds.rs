use std::{fmt, io};

/// Crate-wide `Result` type using [`JnavError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, JnavError>;

/// Top-level error type for jnav.
///
/// Query parsing and resolution never produce errors themselves; they degrade into
/// error tokens and partial resolutions. Everything here comes from the edges: the
/// one-shot entry point, configuration, input and the terminal.
#[derive(Debug)]
pub enum JnavError {
    /// Invalid command-line usage, including unresolved one-shot queries.
    Usage(UsageError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors (input document, config file, terminal).
    Io(io::Error),

    /// The input document is not valid JSON.
    Json(serde_json::Error),

    /// The interactive session was aborted with Ctrl+C.
    Interrupted,
}

/// Usage errors surfaced to the user as fatal messages.
#[derive(Debug)]
pub enum UsageError {
    /// A one-shot query did not resolve to a node.
    BadQuery { query: String, token: String },

    /// The separator is not a single usable character.
    InvalidSeparator(String),

    /// Unknown shell for completion script generation.
    UnsupportedShell(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for JnavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JnavError::Usage(e) => write!(f, "{e}"),
            JnavError::Config(e) => write!(f, "Configuration error: {e}"),
            JnavError::Io(e) => write!(f, "I/O error: {e}"),
            JnavError::Json(e) => write!(f, "Can't parse JSON: {e}"),
            JnavError::Interrupted => write!(f, "Stopped with Ctrl+C"),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::BadQuery { query, token } => {
                write!(f, "Bad query: {query} (failed at '{token}')")
            }
            UsageError::InvalidSeparator(sep) => {
                write!(
                    f,
                    "Separator must be a single character other than '\\' and '[', got '{sep}'"
                )
            }
            UsageError::UnsupportedShell(shell) => write!(
                f,
                "Unsupported shell: {shell}. Supported shells: bash, zsh, fish, powershell, elvish"
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for JnavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JnavError::Usage(e) => Some(e),
            JnavError::Config(e) => Some(e),
            JnavError::Io(e) => Some(e),
            JnavError::Json(e) => Some(e),
            JnavError::Interrupted => None,
        }
    }
}
impl std::error::Error for UsageError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to JnavError ========================= */

impl From<io::Error> for JnavError {
    fn from(err: io::Error) -> Self {
        JnavError::Io(err)
    }
}

impl From<serde_json::Error> for JnavError {
    fn from(err: serde_json::Error) -> Self {
        JnavError::Json(err)
    }
}

impl From<UsageError> for JnavError {
    fn from(err: UsageError) -> Self {
        JnavError::Usage(err)
    }
}

impl From<ConfigError> for JnavError {
    fn from(err: ConfigError) -> Self {
        JnavError::Config(err)
    }
}

impl From<toml::de::Error> for JnavError {
    fn from(err: toml::de::Error) -> Self {
        JnavError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}
