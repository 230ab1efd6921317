//! Command-line interface for jnav
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and merging with arguments
//! - Reading the input document from a file or stdin
//! - Shell completion generation (see [`completion`])

pub mod completion;

use clap::Parser;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Read};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};
use crate::error::{Result, UsageError};
use crate::query::{ESCAPE, OPEN_BRACKET};

/// jnav - interactive JSON navigator
#[derive(Parser, Debug)]
#[command(
    name = "jnav",
    version,
    about = "Interactive JSON navigator with query completion",
    long_about = "Explore a JSON document by typing a path query with live completion,
or run a single query non-interactively with -s. The selected node is printed to stdout."
)]
pub struct CliArgs {
    /// JSON file to read (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Execute the query non-interactively and print the result
    #[arg(short = 's', long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Key separator used in queries
    #[arg(short = 'd', long, value_name = "CHAR")]
    pub separator: Option<String>,

    /// Force colored output, even when stdout is not a terminal
    #[arg(short = 'p', long, conflicts_with = "no_color")]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Start the interactive view listing keys only
    #[arg(long)]
    pub only_keys: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Print a shell completion script (bash, zsh, fish, powershell, elvish)
    #[arg(long, value_name = "SHELL")]
    pub generate_completion: Option<String>,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Effective configuration
    config: Config,
}

impl CliInterface {
    /// Parse the process arguments and load configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Build the interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and environment, then apply arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Effective configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;
        config.apply_env();

        // Logging is not up yet, so this goes straight to stderr
        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args)?;
        Ok(config)
    }

    /// Apply CLI arguments to configuration
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    /// * `args` - Command-line arguments
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) -> Result<()> {
        if let Some(sep) = &args.separator {
            config.query.separator = parse_separator(sep)?.to_string();
        }

        if args.no_color {
            config.display.color_output = false;
        }
        if args.only_keys {
            config.display.only_keys = true;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Effective separator character
    pub fn separator(&self) -> Result<char> {
        self.config.query.separator_char()
    }

    /// Whether the final result is colored
    ///
    /// `--pretty` forces color on; otherwise color follows the config and requires stdout
    /// to be a terminal.
    pub fn use_colors(&self) -> bool {
        self.use_colors_for(io::stdout().is_terminal())
    }

    fn use_colors_for(&self, stdout_is_terminal: bool) -> bool {
        if self.args.pretty {
            return true;
        }
        self.config.display.color_output && stdout_is_terminal
    }

    /// Read and parse the input document
    ///
    /// # Returns
    /// * `Result<Value>` - Parsed document
    pub fn read_document(&self) -> Result<Value> {
        match &self.args.file {
            Some(path) => {
                tracing::debug!("reading document from {}", path.display());
                read_json(BufReader::new(File::open(path)?))
            }
            None => {
                tracing::debug!("reading document from stdin");
                read_json(io::stdin().lock())
            }
        }
    }
}

/// Parse a JSON document from a reader
pub fn read_json<R: Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}

/// Validate a separator given on the command line
///
/// # Arguments
/// * `text` - Raw argument
///
/// # Returns
/// * `Result<char>` - The separator, or `UsageError::InvalidSeparator`
pub fn parse_separator(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(sep), None) if sep != ESCAPE && sep != OPEN_BRACKET => Ok(sep),
        _ => Err(UsageError::InvalidSeparator(text.to_string()).into()),
    }
}
