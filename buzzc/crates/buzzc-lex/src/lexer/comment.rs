//! Block comment lexing.
//!
//! A block comment opens with `<|` and closes with `:>`. It yields three
//! tokens: `COMMENT_BEGIN`, `COMMENT` holding the raw body, and
//! `COMMENT_END`. Comments do not nest.

use std::io::Read;

use buzzc_util::DiagnosticCode;

use crate::error::{LexError, Result};
use crate::token::{Lexeme, Token, TokenKind};
use crate::Lexer;

/// Scanner state inside a comment body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CommentState {
    Scanning,
    SawColon,
    Closed,
}

/// How a block comment ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CommentEnd {
    Closed,
    /// End of input arrived before `:>`.
    Unterminated,
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes a block comment whose `<` is already in the lexeme.
    ///
    /// On end of input the partial body is still stored, an
    /// unterminated-comment diagnostic is emitted and
    /// [`CommentEnd::Unterminated`] is returned so the session stops.
    pub(crate) fn lex_comment(&mut self) -> Result<CommentEnd> {
        // classification only peeked at the pipe
        if self.cursor.match_char('|')? {
            self.lexeme.push('|');
        }
        self.store(TokenKind::CommentBegin)?;

        let (line, column) = self.cursor.position();
        let (body_line, body_column) = (line, column.saturating_add(1));
        let mut body = Lexeme::new();
        let mut closer = (line, column);
        let mut state = CommentState::Scanning;

        while state != CommentState::Closed {
            let Some(c) = self.cursor.read()? else {
                self.store_token(Token::new(TokenKind::Comment, body, body_line, body_column))?;
                self.error_at_token("unterminated block comment")
                    .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
                    .help("close the comment with ':>'")
                    .emit(self.handler);
                return Ok(CommentEnd::Unterminated);
            };

            state = match (state, c) {
                (CommentState::Scanning, ':') => {
                    closer = self.cursor.position();
                    CommentState::SawColon
                },
                (CommentState::Scanning, c) => {
                    body.push(c);
                    CommentState::Scanning
                },
                (CommentState::SawColon, '>') => CommentState::Closed,
                (CommentState::SawColon, c) => {
                    body.push(':');
                    body.push(c);
                    CommentState::Scanning
                },
                (CommentState::Closed, _) => CommentState::Closed,
            };

            self.check_comment_len(body.len())?;
        }

        self.store_token(Token::new(TokenKind::Comment, body, body_line, body_column))?;
        self.store_token(Token::new(TokenKind::CommentEnd, ":>", closer.0, closer.1))?;
        Ok(CommentEnd::Closed)
    }

    fn check_comment_len(&self, len: usize) -> Result<()> {
        match self.config.max_comment_len {
            Some(limit) if len > limit => Err(LexError::CommentTooLong {
                line: self.token_line,
                column: self.token_column,
                limit,
            }),
            _ => Ok(()),
        }
    }
}
