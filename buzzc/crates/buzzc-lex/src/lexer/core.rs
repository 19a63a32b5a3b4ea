//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop, and the
//! helpers the sub-scanners share for recording tokens and reporting
//! malformed input.

use std::io::Read;

use buzzc_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace};

use super::comment::CommentEnd;
use crate::classify::{classify, is_sigil, is_whitespace, CharClass};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::sink::TokenSink;
use crate::token::{Lexeme, Token, TokenKind};

/// Lexer for the buzz language.
///
/// A lexer owns all state for one session: the cursor, the scratch lexeme
/// and the token sink. Nothing is shared between sessions.
///
/// # Example
///
/// ```
/// use buzzc_lex::{Lexer, TokenKind};
/// use buzzc_util::Handler;
///
/// let handler = Handler::new();
/// let lexed = Lexer::new("#x = 5;".as_bytes(), &handler)?.tokenize()?;
///
/// let kinds: Vec<TokenKind> = lexed.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::VarIdent,
///         TokenKind::AssignmentOp,
///         TokenKind::Integer,
///         TokenKind::Semicolon,
///         TokenKind::EndOfTokens,
///     ]
/// );
/// # Ok::<(), buzzc_lex::LexError>(())
/// ```
pub struct Lexer<'a, R> {
    /// Character cursor over the input stream.
    pub(crate) cursor: Cursor<R>,

    /// Receives a diagnostic for every malformed token.
    pub(crate) handler: &'a Handler,

    /// Text of the token being scanned.
    pub(crate) lexeme: Lexeme,

    /// Session settings.
    pub(crate) config: LexerConfig,

    sink: TokenSink,

    /// Byte offset of the current token's first character.
    token_start: usize,

    /// Line of the current token's first character (1-based).
    pub(crate) token_line: u32,

    /// Column of the current token's first character (1-based).
    pub(crate) token_column: u32,
}

/// Output of a lexing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexed {
    /// Tokens in source order, always ending with `END_OF_TOKENS`.
    pub tokens: Vec<Token>,
    /// The input ended inside a block comment.
    pub terminated_early: bool,
}

impl Lexed {
    /// Number of tokens before the sentinel.
    pub fn count(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// Splits into the token sequence and its count.
    pub fn into_parts(self) -> (Vec<Token>, usize) {
        let count = self.count();
        (self.tokens, count)
    }
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Creates a lexer with the default configuration.
    pub fn new(input: R, handler: &'a Handler) -> Result<Self> {
        Self::with_config(input, handler, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    pub fn with_config(input: R, handler: &'a Handler, config: LexerConfig) -> Result<Self> {
        Ok(Self {
            cursor: Cursor::new(input),
            handler,
            lexeme: Lexeme::new(),
            config,
            sink: TokenSink::with_capacity(config.initial_capacity)?,
            token_start: 0,
            token_line: 1,
            token_column: 0,
        })
    }

    /// Runs the session to the end of the input.
    ///
    /// Each cycle skips whitespace, classifies the next significant
    /// character and hands it to exactly one sub-scanner. At end of input
    /// the `END_OF_TOKENS` sentinel is appended. An unterminated block
    /// comment stops the loop early; the sentinel is still appended and
    /// [`Lexed::terminated_early`] is set.
    pub fn tokenize(mut self) -> Result<Lexed> {
        let mut terminated_early = false;

        while let Some(c) = self.skip_whitespace()? {
            self.begin_token(c);
            let class = classify(c, &mut self.cursor)?;
            trace!(
                ?class,
                ch = ?c,
                line = self.token_line,
                column = self.token_column,
                "dispatch"
            );

            match class {
                CharClass::CommentStart => {
                    if self.lex_comment()? == CommentEnd::Unterminated {
                        terminated_early = true;
                        break;
                    }
                },
                CharClass::Letter => self.lex_word()?,
                CharClass::Digit => {
                    let kind = self.lex_number()?;
                    self.store(kind)?;
                },
                CharClass::Other => {
                    let kind = self.lex_other(c)?;
                    self.store(kind)?;
                },
            }
        }

        let (line, column) = self.cursor.position();
        let stored = self.sink.len();
        let tokens = self.sink.finish(Token::end_of_tokens(line, column))?;
        debug!(tokens = stored, terminated_early, "lexing finished");

        Ok(Lexed {
            tokens,
            terminated_early,
        })
    }

    /// Reads past whitespace and returns the first significant character.
    fn skip_whitespace(&mut self) -> Result<Option<char>> {
        while let Some(c) = self.cursor.read()? {
            if !is_whitespace(c) {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }

    /// Resets the scratch lexeme and records where the token starts.
    fn begin_token(&mut self, first: char) {
        self.lexeme.clear();
        self.lexeme.push(first);
        (self.token_line, self.token_column) = self.cursor.position();
        self.token_start = self.cursor.offset().saturating_sub(1);
    }

    /// Identifier, then delimiter, then operator, else `INVALID`.
    fn lex_other(&mut self, c: char) -> Result<TokenKind> {
        if is_sigil(c) {
            return self.lex_identifier();
        }
        if let Some(kind) = super::operator::delimiter_kind(c) {
            return Ok(kind);
        }
        if let Some(kind) = self.lex_operator(c)? {
            return Ok(kind);
        }

        self.error_at_token(format!("unexpected character {:?}", c))
            .code(buzzc_util::DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .emit(self.handler);
        Ok(TokenKind::Invalid)
    }

    /// Appends characters to the lexeme while `accept` holds.
    ///
    /// The first rejected character is pushed back.
    pub(crate) fn consume_while(&mut self, accept: impl Fn(char) -> bool) -> Result<()> {
        while let Some(c) = self.cursor.read()? {
            if accept(c) {
                self.lexeme.push(c);
            } else {
                self.cursor.pushback(c)?;
                break;
            }
        }
        Ok(())
    }

    /// Stores the scratch lexeme as a token of `kind`.
    pub(crate) fn store(&mut self, kind: TokenKind) -> Result<()> {
        let token = Token::new(kind, self.lexeme.clone(), self.token_line, self.token_column);
        self.store_token(token)
    }

    /// Stores a fully built token.
    pub(crate) fn store_token(&mut self, token: Token) -> Result<()> {
        debug!(
            line = token.line,
            column = token.column,
            lexeme = %token.text,
            kind = %token.kind,
            "stored token"
        );
        self.sink.push(token)
    }

    /// Starts an error diagnostic spanning the current token so far.
    pub(crate) fn error_at_token(&self, message: impl Into<String>) -> DiagnosticBuilder {
        let span = Span::new(
            self.token_start,
            self.cursor.offset(),
            self.token_line,
            self.token_column,
        );
        DiagnosticBuilder::error(message).span(span)
    }
}
