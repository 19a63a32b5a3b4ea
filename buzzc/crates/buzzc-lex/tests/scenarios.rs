//! End-to-end lexing scenarios over whole programs.

use buzzc_lex::{lex, lex_with, LexerConfig, Token, TokenKind};
use buzzc_util::Handler;

fn rendered(source: &str) -> Vec<String> {
    let (tokens, _) = lex(source.as_bytes()).unwrap();
    tokens.iter().map(ToString::to_string).collect()
}

#[test]
fn single_keyword() {
    let (tokens, count) = lex("buzz".as_bytes()).unwrap();
    assert_eq!(count, 1);
    assert_eq!(tokens[0], Token::new(TokenKind::Buzz, "buzz", 1, 1));
    assert!(tokens[1].is_end());
}

#[test]
fn assignment_statement() {
    assert_eq!(
        rendered("#x=5+3;"),
        vec![
            "#x:VAR_IDENT",
            "=:ASSIGNMENT_OP",
            "5:INTEGER",
            "+:ADDITION",
            "3:INTEGER",
            ";:SEMICOLON",
            ":END_OF_TOKENS",
        ]
    );
}

#[test]
fn closed_comment() {
    assert_eq!(
        rendered("<|hello:>"),
        vec!["<|:COMMENT_BEGIN", "hello:COMMENT", ":>:COMMENT_END", ":END_OF_TOKENS"]
    );
}

#[test]
fn compound_return() {
    assert_eq!(
        rendered("returnvalue"),
        vec!["return:RETURN_TOKEN", "value:NOISE_WORD", ":END_OF_TOKENS"]
    );
}

#[test]
fn malformed_float() {
    assert_eq!(rendered("3.4.5"), vec!["3.4.5:INVALID", ":END_OF_TOKENS"]);
}

#[test]
fn increment_and_addition() {
    assert_eq!(rendered("++"), vec!["++:INCREMENT", ":END_OF_TOKENS"]);
    assert_eq!(rendered("+"), vec!["+:ADDITION", ":END_OF_TOKENS"]);
}

#[test]
fn unterminated_comment_truncates() {
    let handler = Handler::new();
    let lexed = lex_with(
        "<|abc".as_bytes(),
        &handler,
        LexerConfig::default(),
    )
    .unwrap();
    assert!(lexed.terminated_early);
    assert_eq!(lexed.count(), 2);
    assert_eq!(lexed.tokens[1], Token::new(TokenKind::Comment, "abc", 1, 3));
    assert!(lexed.tokens[2].is_end());
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn whole_program() {
    let source = "\
<| sums the first ten numbers :>
beegin
    int #total = 0;
    while (#i <= 10) do
        #total = #total + #i;
    beegone
    buzz(#total);
    returnvalue #total;
beegone
";
    let handler = Handler::new();
    let lexed = lex_with(source.as_bytes(), &handler, LexerConfig::default()).unwrap();

    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    assert!(!lexed.terminated_early);

    let kinds: Vec<TokenKind> = lexed.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::CommentBegin,
            TokenKind::Comment,
            TokenKind::CommentEnd,
            TokenKind::Beegin,
            TokenKind::IntType,
            TokenKind::VarIdent,
            TokenKind::AssignmentOp,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::While,
            TokenKind::LeftParen,
            TokenKind::VarIdent,
            TokenKind::LessEqual,
            TokenKind::Integer,
            TokenKind::RightParen,
            TokenKind::Do,
            TokenKind::VarIdent,
            TokenKind::AssignmentOp,
            TokenKind::VarIdent,
            TokenKind::Addition,
            TokenKind::VarIdent,
            TokenKind::Semicolon,
            TokenKind::Beegone,
            TokenKind::Buzz,
            TokenKind::LeftParen,
            TokenKind::VarIdent,
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::Return,
            TokenKind::NoiseWord,
            TokenKind::VarIdent,
            TokenKind::Semicolon,
            TokenKind::Beegone,
            TokenKind::EndOfTokens,
        ]
    );

    let int = &lexed.tokens[4];
    assert_eq!((int.line, int.column), (3, 5));
    let noise = &lexed.tokens[29];
    assert_eq!(noise.text, "value");
    assert_eq!((noise.line, noise.column), (8, 11));
}

#[test]
fn errors_do_not_stop_the_session() {
    let handler = Handler::new();
    let lexed = lex_with(
        "hello 12ab #9 & $ buzz".as_bytes(),
        &handler,
        LexerConfig::default(),
    )
    .unwrap();
    let kinds: Vec<TokenKind> = lexed.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Invalid,
            TokenKind::Invalid,
            TokenKind::Invalid,
            TokenKind::Invalid,
            TokenKind::Invalid,
            TokenKind::Buzz,
            TokenKind::EndOfTokens,
        ]
    );

    let codes: Vec<String> = handler
        .diagnostics()
        .iter()
        .filter_map(|d| d.code.map(|c| c.as_str()))
        .collect();
    assert_eq!(codes, vec!["E1004", "E1003", "E1005", "E1007", "E1001"]);
}

#[test]
fn diagnostics_point_at_the_token() {
    let handler = Handler::new();
    lex_with("buzz\n  oops".as_bytes(), &handler, LexerConfig::default()).unwrap();
    let diagnostics = handler.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    let rendered = diagnostics[0].render(Some("main.bz"));
    assert!(rendered.starts_with("error[E1004]: unknown word `oops`"));
    assert!(rendered.contains("main.bz:2:3"));
}
