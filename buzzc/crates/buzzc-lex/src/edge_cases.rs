//! Edge case tests for buzzc-lex

#[cfg(test)]
mod tests {
    use buzzc_util::Handler;

    use crate::lexer::test_support::{kinds, lex_all, pairs};
    use crate::{lex, Lexer, Token, TokenKind};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_letter_word() {
        assert_eq!(pairs("x"), vec![("x".to_string(), TokenKind::Invalid)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = format!("#{}", "a".repeat(10_000));
        let tokens = lex_all(&format!("{name} = 1;"));
        assert_eq!(tokens[0].text, name);
        assert_eq!(tokens[0].kind, TokenKind::VarIdent);
        assert_eq!(tokens[1].column, 10_003);
    }

    #[test]
    fn test_edge_long_integer() {
        let digits = "9".repeat(500);
        assert_eq!(pairs(&digits), vec![(digits.clone(), TokenKind::Integer)]);
    }

    #[test]
    fn test_edge_many_tokens_grow_buffer() {
        let source = "#a ".repeat(1_000);
        let (tokens, count) = lex(source.as_bytes()).unwrap();
        assert_eq!(count, 1_000);
        assert!(tokens[..count].iter().all(|t| t.kind == TokenKind::VarIdent));
        assert_eq!(tokens[999].column, 2_998);
    }

    #[test]
    fn test_edge_no_whitespace_between_tokens() {
        assert_eq!(
            kinds("if(#a>=10){#a--;}"),
            vec![
                TokenKind::If,
                TokenKind::LeftParen,
                TokenKind::VarIdent,
                TokenKind::GreaterEqual,
                TokenKind::Integer,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::VarIdent,
                TokenKind::Decrement,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
            ]
        );
    }

    #[test]
    fn test_edge_comment_opener_vs_less_than() {
        assert_eq!(
            kinds("< |"),
            vec![TokenKind::LessThan, TokenKind::Invalid]
        );
        assert_eq!(
            kinds("#a<|x:>"),
            vec![
                TokenKind::VarIdent,
                TokenKind::CommentBegin,
                TokenKind::Comment,
                TokenKind::CommentEnd,
            ]
        );
    }

    #[test]
    fn test_edge_double_colon_before_close_does_not_close() {
        // the colon after a colon is body text, so the following `>` is too
        let handler = Handler::new();
        let lexed = Lexer::new("<|a::>".as_bytes(), &handler)
            .unwrap()
            .tokenize()
            .unwrap();
        assert!(lexed.terminated_early);
        assert_eq!(lexed.tokens[1].text, "a::>");
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let tokens = lex_all("buzz\r\nhive\r\n");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
    }

    #[test]
    fn test_edge_tabs_count_as_one_column() {
        let tokens = lex_all("\t\t;");
        assert_eq!(tokens[0].column, 3);
    }

    #[test]
    fn test_edge_non_ascii_bytes() {
        // each byte of a multi-byte character is its own invalid token
        let tokens = lex_all("é");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Invalid));
    }

    #[test]
    fn test_edge_non_ascii_text_is_byte_exact() {
        for source in [&[0xC3u8, 0xA9][..], "\u{a9}".as_bytes(), &[0xFF, b' ', 0x80][..]] {
            let (tokens, count) = lex(source).unwrap();
            let rebuilt: Vec<u8> = tokens[..count]
                .iter()
                .flat_map(|t| t.text.as_bytes().iter().copied())
                .collect();
            let expected: Vec<u8> = source.iter().copied().filter(|&b| b != b' ').collect();
            assert_eq!(rebuilt, expected);
            for token in &tokens[..count] {
                assert_eq!(token.text.len(), 1);
                let (again, again_count) = lex(token.text.as_bytes()).unwrap();
                assert_eq!(again_count, 1);
                assert_eq!(again[0].text, token.text);
            }
        }
    }

    #[test]
    fn test_edge_vertical_tab_is_whitespace() {
        assert_eq!(kinds("buzz\x0Bhive"), vec![TokenKind::Buzz, TokenKind::Hive]);
        assert_eq!(pairs("#\x0B;")[0], ("#".to_string(), TokenKind::Invalid));
    }

    #[test]
    fn test_edge_declared_only_keywords_lex_as_invalid() {
        let (tokens, _) = lex("is this".as_bytes()).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].text, "this");
    }

    #[test]
    fn test_edge_nul_byte() {
        assert_eq!(
            pairs("\0;"),
            vec![
                ("\0".to_string(), TokenKind::Invalid),
                (";".to_string(), TokenKind::Semicolon),
            ]
        );
    }

    #[test]
    fn test_edge_quotes_are_delimiters() {
        assert_eq!(
            kinds("\"buzz\""),
            vec![TokenKind::DblQuote, TokenKind::Buzz, TokenKind::DblQuote]
        );
    }

    #[test]
    fn test_edge_returnvalue_needs_exact_word() {
        assert_eq!(
            kinds("returnvalue;"),
            vec![TokenKind::Return, TokenKind::NoiseWord, TokenKind::Semicolon]
        );
        assert_eq!(kinds("return value"), vec![TokenKind::Return, TokenKind::Invalid]);
    }

    #[test]
    fn test_edge_sentinel_after_trailing_newline() {
        let (tokens, _) = lex("buzz\n".as_bytes()).unwrap();
        assert_eq!(tokens.last(), Some(&Token::end_of_tokens(1, 5)));
    }

    #[test]
    fn test_edge_sentinel_after_unterminated_comment() {
        let (tokens, count) = lex("<|".as_bytes()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(tokens[1].text, "");
        assert!(tokens[2].is_end());
    }
}
