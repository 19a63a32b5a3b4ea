//! Lexer module.
//!
//! The lexer is split by dispatch path:
//! - `core` - Lexer struct, session loop and token storage
//! - `word` - keywords, reserved words and compound keywords
//! - `number` - integer and float literals
//! - `identifier` - sigil-prefixed identifiers
//! - `operator` - operators and delimiters
//! - `comment` - `<| ... :>` block comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod word;

pub use core::{Lexed, Lexer};
pub use operator::delimiter_kind;
