//! Identifier lexing.
//!
//! Identifiers are a sigil (`#` or `~`), one ASCII letter, then any run of
//! letters, digits and underscores.

use std::io::Read;

use buzzc_util::DiagnosticCode;

use crate::classify::{is_whitespace, is_word_continue};
use crate::error::Result;
use crate::token::TokenKind;
use crate::Lexer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IdentState {
    /// Only the sigil has been read.
    AfterSigil,
    Body,
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes an identifier whose sigil is already in the lexeme.
    ///
    /// The character that ends the identifier is pushed back.
    pub(crate) fn lex_identifier(&mut self) -> Result<TokenKind> {
        let mut state = IdentState::AfterSigil;

        loop {
            let next = self.cursor.read()?;
            state = match (state, next) {
                (IdentState::AfterSigil, Some(c)) if c.is_ascii_alphabetic() => {
                    self.lexeme.push(c);
                    IdentState::Body
                },
                (IdentState::AfterSigil, next) => return self.invalid_identifier(next),
                (IdentState::Body, Some(c)) if is_word_continue(c) => {
                    self.lexeme.push(c);
                    IdentState::Body
                },
                (IdentState::Body, next) => {
                    if let Some(c) = next {
                        self.cursor.pushback(c)?;
                    }
                    return Ok(TokenKind::VarIdent);
                },
            };
        }
    }

    /// Absorbs everything up to the next whitespace into an invalid token.
    fn invalid_identifier(&mut self, next: Option<char>) -> Result<TokenKind> {
        if let Some(c) = next {
            if is_whitespace(c) {
                self.cursor.pushback(c)?;
            } else {
                self.lexeme.push(c);
                self.consume_while(|c| !is_whitespace(c))?;
            }
        }

        self.error_at_token(format!("invalid identifier `{}`", self.lexeme))
            .code(DiagnosticCode::E_LEXER_INVALID_IDENT)
            .help("an identifier needs a letter right after its sigil")
            .emit(self.handler);
        Ok(TokenKind::Invalid)
    }
}
