//! Token definitions for the buzz language.
//!
//! [`TokenKind`] is a closed set. Its declaration order is stable and its
//! [`as_str`](TokenKind::as_str) names are what the driver prints in the
//! token table, so both are part of the public contract.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use buzzc_util::FxHashMap;

macro_rules! token_kinds {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )*) => {
        /// Classification of a stored token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            $( $(#[$doc])* $variant, )*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )* ];

            /// Stable upper-case name used in token tables.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $name, )*
                }
            }
        }
    };
}

token_kinds! {
    // arithmetic operators
    /// `+`
    Addition => "ADDITION",
    /// `-`
    Subtraction => "SUBTRACTION",
    /// `*`
    Multiplication => "MULTIPLICATION",
    /// `/`
    Division => "DIVISION",
    /// `%`
    Modulo => "MODULO",
    /// `^`
    Exponent => "EXPONENT",
    /// `//`
    IntDivision => "INT_DIVISION",
    /// `=`
    AssignmentOp => "ASSIGNMENT_OP",
    /// `++`
    Increment => "INCREMENT",
    /// `--`
    Decrement => "DECREMENT",

    // relational operators
    /// `>`
    GreaterThan => "GREATER_THAN",
    /// `<`
    LessThan => "LESS_THAN",
    /// `==`
    IsEqualTo => "IS_EQUAL_TO",
    /// `>=`
    GreaterEqual => "GREATER_EQUAL",
    /// `<=`
    LessEqual => "LESS_EQUAL",
    /// `!=`
    NotEqual => "NOT_EQUAL",

    // logical operators
    /// `&&`
    And => "AND",
    /// `||`
    Or => "OR",
    /// `!`
    Not => "NOT",

    // delimiters
    /// `;`
    Semicolon => "SEMICOLON",
    /// `,`
    Comma => "COMMA",
    /// `(`
    LeftParen => "LEFT_PAREN",
    /// `)`
    RightParen => "RIGHT_PAREN",
    /// `[`
    LeftBracket => "LEFT_BRACKET",
    /// `]`
    RightBracket => "RIGHT_BRACKET",
    /// `{`
    LeftBrace => "LEFT_BRACE",
    /// `}`
    RightBrace => "RIGHT_BRACE",
    /// `"`
    DblQuote => "DBL_QUOTE",
    /// `'`
    SnglQuote => "SNGL_QUOTE",

    // keywords; `this`, `is`, `upto`, `downto`, `size` and `returns` are
    // declared for table stability but never matched
    /// `buzz`
    Buzz => "BUZZ_TOKEN",
    /// `beegin`
    Beegin => "BEEGIN_TOKEN",
    /// `queenbee`
    Queenbee => "QUEENBEE_TOKEN",
    /// `beegone`
    Beegone => "BEEGONE_TOKEN",
    /// `for`
    For => "FOR_TOKEN",
    /// `this`
    This => "THIS_TOKEN",
    /// `is`
    Is => "IS_TOKEN",
    /// `while`
    While => "WHILE_TOKEN",
    /// `do`
    Do => "DO_TOKEN",
    /// `upto`
    Upto => "UPTO_TOKEN",
    /// `downto`
    Downto => "DOWNTO_TOKEN",
    /// `hive`
    Hive => "HIVE_TOKEN",
    /// `size`
    Size => "SIZE_TOKEN",
    /// `sting`
    Sting => "STING_TOKEN",
    /// `if`
    If => "IF_TOKEN",
    /// `returns`
    Returns => "RETURNS_TOKEN",
    /// `elseif`
    Elseif => "ELSEIF_TOKEN",
    /// `else`
    Else => "ELSE_TOKEN",
    /// `hover`
    Hover => "HOVER_TOKEN",
    /// `gather`
    Gather => "GATHER_TOKEN",
    /// `buzzout`
    Buzzout => "BUZZOUT_TOKEN",
    /// `switch`
    Switch => "SWITCH_TOKEN",
    /// `case`
    Case => "CASE_TOKEN",
    /// `return`
    Return => "RETURN_TOKEN",

    // reserved words
    /// `char`
    CharType => "CHAR_TOKEN",
    /// `chain`
    ChainType => "CHAIN_TOKEN",
    /// `int`
    IntType => "INT_TOKEN",
    /// `float`
    FloatType => "FLOAT_TOKEN",
    /// `bool`
    BoolType => "BOOL_TOKEN",
    /// `true`
    True => "TRUE_TOKEN",
    /// `false`
    False => "FALSE_TOKEN",

    // literals
    /// Digits with no decimal point
    Integer => "INTEGER",
    /// Digits with one decimal point
    Float => "FLOAT",
    /// Reserved for string literals; quotes currently lex as delimiters
    Str => "STRING",

    // comments
    /// `<|`
    CommentBegin => "COMMENT_BEGIN",
    /// Body of a block comment
    Comment => "COMMENT",
    /// `:>`
    CommentEnd => "COMMENT_END",

    /// Sigil-prefixed identifier
    VarIdent => "VAR_IDENT",
    /// Reserved for function identifiers
    FuncIdent => "FUNC_IDENT",
    /// Synthetic filler split off a compound keyword
    NoiseWord => "NOISE_WORD",
    /// Malformed or unrecognised input
    Invalid => "INVALID",
    /// Sentinel closing every token sequence
    EndOfTokens => "END_OF_TOKENS",
}

impl TokenKind {
    /// Looks a kind up by its table name.
    ///
    /// # Example
    ///
    /// ```
    /// use buzzc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_name("INT_DIVISION"), Some(TokenKind::IntDivision));
    /// assert_eq!(TokenKind::from_name("int_division"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }

    /// Arithmetic, relational and logical operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Addition
                | TokenKind::Subtraction
                | TokenKind::Multiplication
                | TokenKind::Division
                | TokenKind::Modulo
                | TokenKind::Exponent
                | TokenKind::IntDivision
                | TokenKind::AssignmentOp
                | TokenKind::Increment
                | TokenKind::Decrement
                | TokenKind::GreaterThan
                | TokenKind::LessThan
                | TokenKind::IsEqualTo
                | TokenKind::GreaterEqual
                | TokenKind::LessEqual
                | TokenKind::NotEqual
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
        )
    }

    /// Single-character delimiters.
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::DblQuote
                | TokenKind::SnglQuote
        )
    }

    /// Keywords the lexer matches, including `return`.
    pub fn is_keyword(self) -> bool {
        keywords().values().any(|&kind| kind == self)
    }

    /// Reserved type and boolean words.
    pub fn is_reserved_word(self) -> bool {
        reserved_words().values().any(|&kind| kind == self)
    }

    /// Integer, float and string literals.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float | TokenKind::Str)
    }

    /// Comment opener, body and closer.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::CommentBegin | TokenKind::Comment | TokenKind::CommentEnd
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The exact source bytes of a token.
///
/// Input is read one byte at a time, so a lexeme is a byte string that need
/// not be valid UTF-8. Comparisons against `&str` compare bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lexeme(Vec<u8>);

impl Lexeme {
    /// Creates an empty lexeme.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the lexeme, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The lexeme as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// The lexeme as text, with invalid sequences replaced.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no bytes were read.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a character delivered by [`Cursor`](crate::cursor::Cursor).
    ///
    /// The cursor maps each byte to the char with the same value, so the
    /// byte is recovered exactly.
    pub(crate) fn push(&mut self, c: char) {
        match u8::try_from(c) {
            Ok(byte) => self.0.push(byte),
            Err(_) => self.0.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes()),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Debug for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl From<&str> for Lexeme {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<String> for Lexeme {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&[u8]> for Lexeme {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Lexeme {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl PartialEq<str> for Lexeme {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Lexeme {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<String> for Lexeme {
    fn eq(&self, other: &String) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Lexeme {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for Lexeme {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

/// A classified lexeme with the position of its first character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// The exact lexeme, or the fixed text of a synthetic token
    pub text: Lexeme,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<Lexeme>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Creates the `END_OF_TOKENS` sentinel.
    pub fn end_of_tokens(line: u32, column: u32) -> Self {
        Self::new(TokenKind::EndOfTokens, Lexeme::new(), line, column)
    }

    /// Returns true for the sentinel.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfTokens
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.text, self.kind)
    }
}

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        [
            ("beegin", TokenKind::Beegin),
            ("beegone", TokenKind::Beegone),
            ("buzz", TokenKind::Buzz),
            ("buzzout", TokenKind::Buzzout),
            ("case", TokenKind::Case),
            ("do", TokenKind::Do),
            ("else", TokenKind::Else),
            ("elseif", TokenKind::Elseif),
            ("for", TokenKind::For),
            ("gather", TokenKind::Gather),
            ("hive", TokenKind::Hive),
            ("hover", TokenKind::Hover),
            ("if", TokenKind::If),
            ("queenbee", TokenKind::Queenbee),
            ("return", TokenKind::Return),
            ("sting", TokenKind::Sting),
            ("switch", TokenKind::Switch),
            ("while", TokenKind::While),
        ]
        .into_iter()
        .collect()
    })
}

fn reserved_words() -> &'static FxHashMap<&'static str, TokenKind> {
    static RESERVED: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    RESERVED.get_or_init(|| {
        [
            ("bool", TokenKind::BoolType),
            ("chain", TokenKind::ChainType),
            ("char", TokenKind::CharType),
            ("false", TokenKind::False),
            ("float", TokenKind::FloatType),
            ("int", TokenKind::IntType),
            ("true", TokenKind::True),
        ]
        .into_iter()
        .collect()
    })
}

/// Exact-match keyword lookup.
///
/// # Example
///
/// ```
/// use buzzc_lex::token::{keyword_kind, TokenKind};
///
/// assert_eq!(keyword_kind("queenbee"), Some(TokenKind::Queenbee));
/// assert_eq!(keyword_kind("Buzz"), None);
/// ```
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    keywords().get(word).copied()
}

/// Exact-match lookup of reserved type and boolean words.
pub fn reserved_kind(word: &str) -> Option<TokenKind> {
    reserved_words().get(word).copied()
}

/// A keyword written as one word but lexed as a keyword plus a noise word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompoundKeyword {
    /// Text of the leading keyword token
    pub head: &'static str,
    /// Kind of the leading keyword token
    pub kind: TokenKind,
    /// Text of the trailing `NOISE_WORD` token
    pub noise: &'static str,
}

const COMPOUND_KEYWORDS: &[(&str, CompoundKeyword)] = &[(
    "returnvalue",
    CompoundKeyword {
        head: "return",
        kind: TokenKind::Return,
        noise: "value",
    },
)];

/// Looks up words such as `returnvalue` that split into two tokens.
pub fn compound_keyword(word: &str) -> Option<CompoundKeyword> {
    COMPOUND_KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == word)
        .map(|&(_, compound)| compound)
}
