//! Character classification for dispatch.
//!
//! Only the ASCII letter, digit and whitespace classes are recognised.
//! Everything else, including bytes above 0x7F, is [`CharClass::Other`].

use std::io::Read;

use crate::cursor::Cursor;
use crate::error::Result;

/// Coarse class of the first significant character of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `<` immediately followed by `|`
    CommentStart,
    /// ASCII letter
    Letter,
    /// ASCII digit
    Digit,
    /// Anything else
    Other,
}

impl CharClass {
    /// Classifies `c` given the character that follows it.
    ///
    /// `next` only matters for `<`; pass `None` when it is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use buzzc_lex::classify::CharClass;
    ///
    /// assert_eq!(CharClass::of('<', Some('|')), CharClass::CommentStart);
    /// assert_eq!(CharClass::of('<', Some('=')), CharClass::Other);
    /// assert_eq!(CharClass::of('q', None), CharClass::Letter);
    /// ```
    pub fn of(c: char, next: Option<char>) -> CharClass {
        match c {
            '<' if next == Some('|') => CharClass::CommentStart,
            c if c.is_ascii_alphabetic() => CharClass::Letter,
            c if c.is_ascii_digit() => CharClass::Digit,
            _ => CharClass::Other,
        }
    }
}

/// Classifies a character that has just been read from `cursor`.
///
/// For `<` the following character is peeked and pushed back, so the
/// stream is left exactly where it was whatever the outcome.
pub fn classify<R: Read>(c: char, cursor: &mut Cursor<R>) -> Result<CharClass> {
    let next = if c == '<' { cursor.peek()? } else { None };
    Ok(CharClass::of(c, next))
}

/// Whitespace skipped between tokens.
///
/// The C `isspace` set: space, tab, newline, vertical tab, form feed and
/// carriage return. CRLF input lexes the same as LF input.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Identifier sigils.
#[inline]
pub fn is_sigil(c: char) -> bool {
    matches!(c, '#' | '~')
}

/// Characters allowed after the first letter of a word or identifier.
#[inline]
pub fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
