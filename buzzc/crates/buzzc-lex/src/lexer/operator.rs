//! Operator and delimiter lexing.

use std::io::Read;

use buzzc_util::DiagnosticCode;

use crate::error::Result;
use crate::token::TokenKind;
use crate::Lexer;

/// Maps a single-character delimiter to its kind.
///
/// # Example
///
/// ```
/// use buzzc_lex::{delimiter_kind, TokenKind};
///
/// assert_eq!(delimiter_kind(';'), Some(TokenKind::Semicolon));
/// assert_eq!(delimiter_kind('+'), None);
/// ```
pub fn delimiter_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        '"' => TokenKind::DblQuote,
        '\'' => TokenKind::SnglQuote,
        _ => return None,
    };
    Some(kind)
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Lexes an operator starting with `lead`, longest match first.
    ///
    /// Returns `None` when `lead` cannot start an operator. A lone `&` or
    /// `|` yields `INVALID`.
    pub(crate) fn lex_operator(&mut self, lead: char) -> Result<Option<TokenKind>> {
        let kind = match lead {
            '+' => self.lex_pair('+', TokenKind::Increment, TokenKind::Addition)?,
            '-' => self.lex_pair('-', TokenKind::Decrement, TokenKind::Subtraction)?,
            '/' => self.lex_pair('/', TokenKind::IntDivision, TokenKind::Division)?,
            '=' => self.lex_pair('=', TokenKind::IsEqualTo, TokenKind::AssignmentOp)?,
            '>' => self.lex_pair('=', TokenKind::GreaterEqual, TokenKind::GreaterThan)?,
            '<' => self.lex_pair('=', TokenKind::LessEqual, TokenKind::LessThan)?,
            '!' => self.lex_pair('=', TokenKind::NotEqual, TokenKind::Not)?,
            '*' => TokenKind::Multiplication,
            '%' => TokenKind::Modulo,
            '^' => TokenKind::Exponent,
            '&' => self.lex_doubled('&', TokenKind::And)?,
            '|' => self.lex_doubled('|', TokenKind::Or)?,
            _ => return Ok(None),
        };
        Ok(Some(kind))
    }

    /// `long` if the next character is `second`, otherwise `short`.
    fn lex_pair(&mut self, second: char, long: TokenKind, short: TokenKind) -> Result<TokenKind> {
        if self.cursor.match_char(second)? {
            self.lexeme.push(second);
            Ok(long)
        } else {
            Ok(short)
        }
    }

    /// Operators that only exist doubled, such as `&&`.
    fn lex_doubled(&mut self, c: char, kind: TokenKind) -> Result<TokenKind> {
        if self.cursor.match_char(c)? {
            self.lexeme.push(c);
            return Ok(kind);
        }

        self.error_at_token(format!("incomplete operator `{}`", c))
            .code(DiagnosticCode::E_LEXER_INCOMPLETE_OPERATOR)
            .help(format!("did you mean `{c}{c}`?"))
            .emit(self.handler);
        Ok(TokenKind::Invalid)
    }
}
