//! Word lexing.
//!
//! A word starts with an ASCII letter and runs over letters, digits and
//! underscores. It is checked against the compound keywords, then the
//! keywords, then the reserved words. Plain names are not valid here:
//! identifiers always carry a `#` or `~` sigil, so an unmatched word is
//! `INVALID`.

use std::io::Read;

use buzzc_util::DiagnosticCode;

use crate::classify::is_word_continue;
use crate::error::Result;
use crate::token::{compound_keyword, keyword_kind, reserved_kind, Token, TokenKind};
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes a word whose first letter is already in the lexeme.
    pub(crate) fn lex_word(&mut self) -> Result<()> {
        self.consume_while(is_word_continue)?;

        let compound = self.lexeme.as_str().and_then(compound_keyword);
        if let Some(compound) = compound {
            let (line, column) = (self.token_line, self.token_column);
            let noise_column = column.saturating_add(compound.head.len() as u32);
            self.store_token(Token::new(compound.kind, compound.head, line, column))?;
            return self.store_token(Token::new(
                TokenKind::NoiseWord,
                compound.noise,
                line,
                noise_column,
            ));
        }

        let matched = self
            .lexeme
            .as_str()
            .and_then(|word| keyword_kind(word).or_else(|| reserved_kind(word)));
        let kind = match matched {
            Some(kind) => kind,
            None => {
                self.error_at_token(format!("unknown word `{}`", self.lexeme))
                    .code(DiagnosticCode::E_LEXER_UNKNOWN_WORD)
                    .help("identifiers start with '#' or '~'")
                    .emit(self.handler);
                TokenKind::Invalid
            },
        };
        self.store(kind)
    }
}
