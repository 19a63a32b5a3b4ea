//! Character cursor over an input stream.
//!
//! This module provides the [`Cursor`] struct, which pulls one character at a
//! time from any [`Read`] source, allows exactly one character of pushback,
//! and tracks line/column information for token positions and diagnostics.
//!
//! Input is treated as single bytes: each byte becomes the `char` with the
//! same value, so bytes above 0x7F classify as "other" and
//! [`Lexeme`](crate::token::Lexeme) can store them back unchanged.

use std::io::{self, Bytes, Read};

use crate::error::{LexError, Result};

/// A cursor for reading a stream character by character.
///
/// Position rules:
/// - `line` starts at 1 and `column` at 0.
/// - Every successful [`read`](Cursor::read) advances `column` by one, so
///   right after a read `column` is the 1-based column of that character.
/// - After a newline has been returned, the *next* read resets `column` to
///   zero and increments `line` before counting the new character.
/// - [`pushback`](Cursor::pushback) steps the column back by one.
///
/// # Example
///
/// ```
/// use buzzc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb".as_bytes());
/// assert_eq!(cursor.read().unwrap(), Some('a'));
/// assert_eq!(cursor.position(), (1, 1));
/// assert_eq!(cursor.read().unwrap(), Some('\n'));
/// assert_eq!(cursor.read().unwrap(), Some('b'));
/// assert_eq!(cursor.position(), (2, 1));
/// ```
pub struct Cursor<R> {
    /// The byte stream being read.
    bytes: Bytes<R>,

    /// Single-character pushback slot.
    pending: Option<char>,

    /// Current line number (1-based).
    line: u32,

    /// Column of the most recently read character (0 before any read).
    column: u32,

    /// Set after returning a newline; the next read starts a new line.
    at_line_end: bool,

    /// Bytes consumed so far, net of pushback.
    offset: usize,

    /// The stream has reported end of input.
    exhausted: bool,
}

impl<R: Read> Cursor<R> {
    /// Creates a new cursor over the given stream.
    ///
    /// The cursor reads one byte per call, so unbuffered sources such as
    /// files should be wrapped in a `BufReader` first.
    pub fn new(input: R) -> Self {
        Self {
            bytes: input.bytes(),
            pending: None,
            line: 1,
            column: 0,
            at_line_end: false,
            offset: 0,
            exhausted: false,
        }
    }

    /// Reads the next character, or `None` at end of stream.
    ///
    /// A pushed-back character is delivered before anything new is pulled
    /// from the stream. Interrupted reads are retried; any other I/O error is
    /// returned.
    pub fn read(&mut self) -> Result<Option<char>> {
        let next = match self.pending.take() {
            Some(c) => Some(c),
            None => self.pull()?,
        };

        let Some(c) = next else {
            return Ok(None);
        };

        if self.at_line_end {
            self.line = self.line.saturating_add(1);
            self.column = 0;
            self.at_line_end = false;
        }
        self.column = self.column.saturating_add(1);
        self.offset = self.offset.saturating_add(1);
        if c == '\n' {
            self.at_line_end = true;
        }

        Ok(Some(c))
    }

    fn pull(&mut self) -> Result<Option<char>> {
        if self.exhausted {
            return Ok(None);
        }
        loop {
            match self.bytes.next() {
                Some(Ok(byte)) => return Ok(Some(char::from(byte))),
                Some(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Some(Err(e)) => return Err(LexError::Io(e)),
                None => {
                    self.exhausted = true;
                    return Ok(None);
                },
            }
        }
    }

    /// Returns a previously read character to the stream.
    ///
    /// Only one character may be pending at a time; pushing back a second
    /// one before it has been re-read fails with
    /// [`LexError::PushbackOccupied`] and leaves the cursor unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use buzzc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("xy".as_bytes());
    /// let x = cursor.read().unwrap().unwrap();
    /// cursor.pushback(x).unwrap();
    /// assert!(cursor.pushback('y').is_err());
    /// assert_eq!(cursor.read().unwrap(), Some('x'));
    /// ```
    pub fn pushback(&mut self, c: char) -> Result<()> {
        if let Some(pending) = self.pending {
            return Err(LexError::PushbackOccupied {
                pending,
                rejected: c,
            });
        }

        self.pending = Some(c);
        self.column = self.column.saturating_sub(1);
        self.offset = self.offset.saturating_sub(1);
        if c == '\n' {
            self.at_line_end = false;
        }
        Ok(())
    }

    /// Returns the next character without consuming it.
    ///
    /// Uses the pushback slot, so it must not be called while a character
    /// is already pending.
    pub fn peek(&mut self) -> Result<Option<char>> {
        let next = self.read()?;
        if let Some(c) = next {
            self.pushback(c)?;
        }
        Ok(next)
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// Any other character is pushed back.
    ///
    /// # Example
    ///
    /// ```
    /// use buzzc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=+".as_bytes());
    /// assert!(cursor.match_char('=').unwrap());
    /// assert!(!cursor.match_char('=').unwrap());
    /// assert_eq!(cursor.read().unwrap(), Some('+'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> Result<bool> {
        match self.read()? {
            Some(c) if c == expected => Ok(true),
            Some(c) => {
                self.pushback(c)?;
                Ok(false)
            },
            None => Ok(false),
        }
    }

    /// Returns `(line, column)`.
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    #[cfg(test)]
    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    /// Returns the number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[cfg(test)]
    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
