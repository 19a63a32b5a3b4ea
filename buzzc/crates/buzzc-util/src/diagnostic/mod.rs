//! Diagnostic module - Error reporting infrastructure.
//!
//! Phases never print. They build a [`Diagnostic`] (usually through
//! [`DiagnosticBuilder`]) and hand it to a [`Handler`]; the driver decides
//! how and where collected diagnostics are shown.
//!
//! # Examples
//!
//! ```
//! use buzzc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use buzzc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(3, 4, 1, 4))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem in the input
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic as multi-line text
    ///
    /// `origin` names the input (usually a file path) in the location line.
    ///
    /// # Examples
    ///
    /// ```
    /// use buzzc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use buzzc_util::Span;
    ///
    /// let diag = Diagnostic::error("unexpected character '@'", Span::new(8, 9, 2, 7))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    /// assert_eq!(
    ///     diag.render(Some("main.bz")),
    ///     "error[E1001]: unexpected character '@'\n  --> main.bz:2:7"
    /// );
    /// ```
    pub fn render(&self, origin: Option<&str>) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };
        if self.span != Span::DUMMY {
            match origin {
                Some(origin) => out.push_str(&format!("\n  --> {}:{}", origin, self.span)),
                None => out.push_str(&format!("\n  --> {}", self.span)),
            }
        }
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = {}: {}", Level::Note, note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = {}: {}", Level::Help, help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler is shared by reference; collection goes through a `RefCell`
/// so emitting never needs a mutable borrow of the handler itself.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all collected diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn test_diagnostic_with_code() {
        let code = DiagnosticCode::E_LEXER_UNKNOWN_WORD;
        let diag = Diagnostic::error("test", Span::DUMMY).with_code(code);
        assert_eq!(diag.code, Some(code));
    }

    #[test]
    fn test_render_without_span_or_code() {
        let diag = Diagnostic::error("odd input", Span::DUMMY);
        assert_eq!(diag.render(None), "error: odd input");
        assert_eq!(diag.to_string(), "error: odd input");
    }

    #[test]
    fn test_render_full() {
        let diag = DiagnosticBuilder::error("lone '&'")
            .code(DiagnosticCode::E_LEXER_INCOMPLETE_OPERATOR)
            .span(Span::new(2, 3, 1, 3))
            .note("'&' only exists doubled")
            .help("use '&&' for logical and")
            .build()
            .with_snippet(SourceSnippet::new("a & b", 1, 3, 4, None::<String>));
        let expected = "error[E1007]: lone '&'\n  --> 1:3\n  1 | a & b\n    |   ^\n  = note: '&' only exists doubled\n  = help: use '&&' for logical and";
        assert_eq!(diag.render(None), expected);
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_counts_errors() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("e2", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_take_drains() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        assert_eq!(handler.take().len(), 1);
        assert!(handler.diagnostics().is_empty());
    }
}
