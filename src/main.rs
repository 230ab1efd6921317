//! jnav - interactive JSON navigator
//!
//! Reads a JSON document and lets the user walk it with a path query, completing keys as
//! they type. The node selected on Enter is printed to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! curl -s https://api.example.com/items | jnav
//!
//! # One-shot query
//! jnav -s 'items[0].name' data.json
//! ```

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use jnav::cli::CliInterface;
use jnav::cli::completion::generate_completion;
use jnav::error::Result;
use jnav::{Explorer, ExplorerUi, Formatter};

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Read the document
/// 4. Run the query once, or start the interactive explorer
/// 5. Print the selected node
///
/// # Returns
/// * `Result<()>` - Success or error
fn run() -> Result<()> {
    let cli = CliInterface::new()?;
    initialize_logging(&cli)?;
    tracing::debug!(version = jnav::VERSION, "jnav starting");

    if let Some(shell) = &cli.args().generate_completion {
        return generate_completion(shell);
    }

    let separator = cli.separator()?;
    let document = cli.read_document()?;
    let mut explorer = Explorer::new(&document, separator);
    explorer.set_only_keys(cli.config().display.only_keys);

    let selected = match cli.args().query.as_deref() {
        Some(query) if !query.is_empty() => {
            tracing::debug!(query, "running one-shot query");
            Some(explorer.execute(query)?)
        }
        _ => ExplorerUi::new(cli.config().display.color_output).run(&mut explorer)?,
    };

    let formatter = Formatter::new(cli.use_colors());
    println!("{}", formatter.format(selected)?);
    Ok(())
}

/// Initialize logging system from the effective configuration
///
/// Logs go to the configured file when one is set, otherwise to stderr. `RUST_LOG`
/// directives take precedence over the configured level.
///
/// # Arguments
/// * `cli` - CLI interface with the merged configuration
fn initialize_logging(cli: &CliInterface) -> Result<()> {
    let logging = &cli.config().logging;

    let level = LevelFilter::from_level(logging.level.to_tracing_level());
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &logging.file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let subscriber = subscriber.with_writer(Mutex::new(file)).with_ansi(false);
            if logging.timestamps {
                subscriber.init();
            } else {
                subscriber.without_time().init();
            }
        }
        None => {
            let subscriber = subscriber.with_writer(io::stderr);
            if logging.timestamps {
                subscriber.init();
            } else {
                subscriber.without_time().init();
            }
        }
    }

    Ok(())
}
