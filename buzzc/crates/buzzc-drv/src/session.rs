//! One `buzzc` run: check the file names, lex the source and write the
//! token list.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use buzzc_lex::{lex_with, Lexed};
use buzzc_util::{Diagnostic, Handler, SourceSnippet};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{DriverError, Result};
use crate::output::{write_json, write_table, OutputFormat};

/// Per-run options resolved from the command line and the config file.
#[derive(Debug, Clone)]
pub struct Options {
    /// Source file.
    pub input: PathBuf,
    /// Destination of the token list.
    pub output: PathBuf,
    /// Table or JSON.
    pub format: OutputFormat,
    /// Print the token list on stdout as well.
    pub echo: bool,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Tokens written, sentinel excluded.
    pub token_count: usize,
    /// Diagnostics reported while lexing.
    pub diagnostics: usize,
    /// The source ended inside a block comment.
    pub terminated_early: bool,
}

/// Driver session
pub struct Session {
    options: Options,
    config: Config,
    handler: Handler,
}

impl Session {
    /// Creates a session.
    pub fn new(options: Options, config: Config) -> Self {
        Self {
            options,
            config,
            handler: Handler::new(),
        }
    }

    /// Runs the session.
    ///
    /// Diagnostics are rendered on stderr; the token list goes to the
    /// output file and, when echo is on, to stdout.
    pub fn run(&self) -> Result<Outcome> {
        self.check_extension(&self.options.input)?;
        self.check_extension(&self.options.output)?;

        let source = fs::read(&self.options.input)?;
        if source.is_empty() {
            return Err(DriverError::EmptyInput);
        }
        debug!(input = %self.options.input.display(), bytes = source.len(), "lexing");

        let lexed = lex_with(source.as_slice(), &self.handler, self.config.lexer_config())?;
        let diagnostics = self.report_diagnostics(&source);
        if lexed.terminated_early {
            warn!(input = %self.options.input.display(), "input ended inside a block comment");
        }

        let rendered = self.render(&lexed)?;
        fs::write(&self.options.output, &rendered)?;
        if self.options.echo {
            io::stdout().write_all(&rendered)?;
        }

        Ok(Outcome {
            token_count: lexed.count(),
            diagnostics,
            terminated_early: lexed.terminated_early,
        })
    }

    fn check_extension(&self, path: &Path) -> Result<()> {
        let name = path.to_string_lossy();
        let expected = &self.config.extension;
        if name.len() > expected.len() && name.ends_with(expected.as_str()) {
            Ok(())
        } else {
            Err(DriverError::InvalidExtension {
                path: name.into_owned(),
                expected: expected.clone(),
            })
        }
    }

    fn render(&self, lexed: &Lexed) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self.options.format {
            OutputFormat::Table => {
                write_table(&mut out, &lexed.tokens, self.config.output.column_width)?
            },
            OutputFormat::Json => write_json(&mut out, &lexed.tokens)?,
        }
        Ok(out)
    }

    /// Prints every collected diagnostic with a snippet of its source line.
    fn report_diagnostics(&self, source: &[u8]) -> usize {
        let origin = self.options.input.to_string_lossy();
        let diagnostics = self.handler.take();
        for diagnostic in &diagnostics {
            let diagnostic = with_source_line(diagnostic.clone(), source);
            eprintln!("{}\n", diagnostic.render(Some(&origin)));
        }
        diagnostics.len()
    }
}

/// Attaches the source line the diagnostic points at.
fn with_source_line(diagnostic: Diagnostic, source: &[u8]) -> Diagnostic {
    let span = diagnostic.span;
    let Some(line) = source_line(source, span.line) else {
        return diagnostic;
    };

    let start = span.column as usize;
    let end = (start + span.len()).min(line.len() + 1);
    diagnostic.with_snippet(SourceSnippet::new(line, span.line as usize, start, end, None::<String>))
}

fn source_line(source: &[u8], line: u32) -> Option<String> {
    let index = (line as usize).checked_sub(1)?;
    let raw = source.split(|&b| b == b'\n').nth(index)?;
    let text: String = raw.iter().map(|&b| char::from(b)).collect();
    Some(text.trim_end_matches('\r').to_string())
}
