//! Number literal lexing.
//!
//! A digit run is an `INTEGER`; a digit run with one decimal point is a
//! `FLOAT`. A second decimal point or a letter glued to the digits makes
//! the whole run `INVALID`.

use std::io::Read;

use buzzc_util::DiagnosticCode;

use crate::classify::is_word_continue;
use crate::error::Result;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes a number whose first digit is already in the lexeme.
    pub(crate) fn lex_number(&mut self) -> Result<TokenKind> {
        let mut seen_point = false;

        while let Some(c) = self.cursor.read()? {
            match c {
                '0'..='9' => self.lexeme.push(c),
                '.' if !seen_point => {
                    seen_point = true;
                    self.lexeme.push(c);
                },
                '.' => {
                    self.lexeme.push(c);
                    return self.malformed_number("more than one decimal point");
                },
                c if is_word_continue(c) => {
                    self.lexeme.push(c);
                    return self.malformed_number("letters directly after digits");
                },
                c => {
                    self.cursor.pushback(c)?;
                    break;
                },
            }
        }

        Ok(if seen_point {
            TokenKind::Float
        } else {
            TokenKind::Integer
        })
    }

    /// Absorbs the rest of a malformed number and reports it.
    fn malformed_number(&mut self, reason: &str) -> Result<TokenKind> {
        self.consume_while(|c| is_word_continue(c) || c == '.')?;
        self.error_at_token(format!("invalid number `{}`", self.lexeme))
            .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .note(reason)
            .emit(self.handler);
        Ok(TokenKind::Invalid)
    }
}
