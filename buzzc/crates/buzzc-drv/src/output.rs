//! Token table and JSON writers.

use std::borrow::Cow;
use std::io::{self, Write};

use buzzc_lex::Token;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default width of each table column.
pub const DEFAULT_COLUMN_WIDTH: usize = 20;

/// How the token list is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-column `TOKEN` / `TOKEN TYPE` table
    #[default]
    Table,
    /// JSON array of token objects
    Json,
}

#[derive(Serialize)]
struct TokenRow<'a> {
    text: Cow<'a, str>,
    kind: &'static str,
    line: u32,
    column: u32,
}

/// Writes the token table.
///
/// The sentinel is not listed. Each column is left-aligned to `width` and
/// the rule under the header spans both columns. Lexemes are written as
/// their raw source bytes and padded by byte length.
///
/// # Example
///
/// ```
/// use buzzc_drv::output::write_table;
/// use buzzc_lex::{Token, TokenKind};
///
/// let tokens = [
///     Token::new(TokenKind::Buzz, "buzz", 1, 1),
///     Token::end_of_tokens(1, 4),
/// ];
/// let mut out = Vec::new();
/// write_table(&mut out, &tokens, 6).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "TOKEN  TOKEN TYPE\n----------------\nbuzz   BUZZ_TOKEN\n"
/// );
/// ```
pub fn write_table<W: Write>(out: &mut W, tokens: &[Token], width: usize) -> io::Result<()> {
    writeln!(out, "{:<width$} {:<width$}", "TOKEN", "TOKEN TYPE")?;
    writeln!(out, "{}", "-".repeat(2 * width + 4))?;
    for token in tokens.iter().take_while(|t| !t.is_end()) {
        let text = token.text.as_bytes();
        out.write_all(text)?;
        let pad = width.saturating_sub(text.len());
        writeln!(out, "{:pad$} {:<width$}", "", token.kind.as_str())?;
    }
    Ok(())
}

/// Writes the tokens as a pretty-printed JSON array, sentinel excluded.
///
/// JSON strings are UTF-8, so bytes that do not form valid UTF-8 are
/// replaced with U+FFFD.
pub fn write_json<W: Write>(out: &mut W, tokens: &[Token]) -> serde_json::Result<()> {
    let rows: Vec<TokenRow<'_>> = tokens
        .iter()
        .take_while(|t| !t.is_end())
        .map(|t| TokenRow {
            text: t.text.to_str_lossy(),
            kind: t.kind.as_str(),
            line: t.line,
            column: t.column,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out).map_err(serde_json::Error::io)
}
