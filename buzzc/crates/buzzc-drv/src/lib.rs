//! buzzc-drv - Command-line driver for the buzz lexer
//!
//! The `buzzc` binary lexes one `.bz` source file and writes its token
//! table to an output file:
//!
//! ```text
//! buzzc [OPTIONS] <INPUT> <OUTPUT>
//! ```
//!
//! Lexical errors never fail the run. They show up as `INVALID` rows in the
//! table and as diagnostics on stderr.

pub mod config;
pub mod error;
pub mod output;
pub mod session;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::Config;
pub use error::{DriverError, Result};
pub use output::OutputFormat;
pub use session::{Options, Outcome, Session};

/// Lexical analyzer for the buzz language
#[derive(Parser, Debug)]
#[command(name = "buzzc")]
#[command(author = "Buzz Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the buzz language", long_about = None)]
pub struct Cli {
    /// Source file to lex
    pub input: PathBuf,

    /// File the token table is written to
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "BUZZ_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "BUZZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "BUZZ_NO_COLOR")]
    pub no_color: bool,

    /// Do not print the token table on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Largest accepted block comment body in bytes
    #[arg(long)]
    pub max_comment_len: Option<usize>,
}

impl Cli {
    /// Folds command-line overrides into the loaded configuration.
    pub fn resolve(self, mut config: Config) -> (Options, Config) {
        if let Some(limit) = self.max_comment_len {
            config.lexer.max_comment_len = Some(limit);
        }
        let options = Options {
            input: self.input,
            output: self.output,
            format: self.format.unwrap_or(config.output.format),
            echo: config.output.echo && !self.quiet,
        };
        (options, config)
    }
}

/// Entry point for the buzzc binary.
///
/// Parses arguments, initializes logging, loads configuration and runs one
/// session.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }?;

    let (options, config) = cli.resolve(config);
    let output = options.output.clone();
    let outcome = Session::new(options, config).run()?;

    tracing::debug!(
        tokens = outcome.token_count,
        diagnostics = outcome.diagnostics,
        "run finished"
    );
    println!(
        "Lexical analysis complete. Tokens written to '{}'.",
        output.display()
    );
    Ok(())
}

/// Initialize the logging system.
///
/// Events go to stderr so they never mix with the token table on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
