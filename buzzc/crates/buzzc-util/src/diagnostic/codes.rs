//! Diagnostic codes for categorizing lexical errors.
//!
//! # Examples
//!
//! ```
//! use buzzc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_NUMBER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1003);
//! assert_eq!(code.as_str(), "E1003");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number:04}`, e.g. `E1001`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1003: Lexer - Invalid numeric literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Lexer - Word is neither a keyword nor a reserved word
    pub const E_LEXER_UNKNOWN_WORD: Self = Self::new("E", 1004);
    /// E1005: Lexer - Sigil not followed by a letter
    pub const E_LEXER_INVALID_IDENT: Self = Self::new("E", 1005);
    /// E1006: Lexer - Block comment reaches end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1006);
    /// E1007: Lexer - Lone `&` or `|`
    pub const E_LEXER_INCOMPLETE_OPERATOR: Self = Self::new("E", 1007);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_as_str_pads_number() {
        assert_eq!(DiagnosticCode::new("W", 7).as_str(), "W0007");
        assert_eq!(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR.as_str(), "E1001");
    }

    #[test]
    fn test_code_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT;
        assert_eq!(format!("{}", code), "E1006");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1006)");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEXER_INVALID_NUMBER,
            DiagnosticCode::E_LEXER_UNKNOWN_WORD,
            DiagnosticCode::E_LEXER_INVALID_IDENT,
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            DiagnosticCode::E_LEXER_INCOMPLETE_OPERATOR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
