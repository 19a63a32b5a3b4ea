//! Property tests for the lexer.

use buzzc_lex::{lex, TokenKind};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "buzz", "beegin", "beegone", "queenbee", "hive", "sting", "hover", "gather",
            "buzzout", "if", "elseif", "else", "for", "while", "do", "int",
            "float", "char", "chain", "bool", "true", "false", "return", "+", "++", "-", "--",
            "*", "/", "//", "%", "^", "=", "==", "!=", "!", "<", "<=", ">", ">=", "&&", "||",
            ";", ",", "(", ")", "[", "]", "{", "}",
        ])
        .prop_map(str::to_string),
        "[#~][a-zA-Z][a-zA-Z0-9_]{0,10}",
        "[0-9]{1,8}",
        "[0-9]{1,4}\\.[0-9]{0,4}",
    ]
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t\n]{1,3}"
}

proptest! {
    #[test]
    fn sentinel_is_always_last(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let (tokens, count) = lex(bytes.as_slice()).unwrap();
        prop_assert_eq!(tokens.len(), count + 1);
        prop_assert!(tokens[count].is_end());
        prop_assert!(tokens[..count].iter().all(|t| !t.is_end()));
    }

    #[test]
    fn positions_are_one_based_and_ordered(source in "[ -~\n\t]{0,200}") {
        let (tokens, count) = lex(source.as_bytes()).unwrap();
        let stored = &tokens[..count];
        prop_assert!(stored.iter().all(|t| t.line >= 1 && t.column >= 1));
        for pair in stored.windows(2) {
            prop_assert!((pair[0].line, pair[0].column) <= (pair[1].line, pair[1].column));
        }
    }

    #[test]
    fn lexing_is_deterministic(source in "[ -~\n]{0,200}") {
        let first = lex(source.as_bytes()).unwrap();
        let second = lex(source.as_bytes()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn separated_words_keep_their_text(words in prop::collection::vec(word(), 1..40)) {
        let source = words.join(" ");
        let (tokens, count) = lex(source.as_bytes()).unwrap();
        let texts: Vec<String> = tokens[..count].iter().map(|t| t.text.to_string()).collect();
        prop_assert_eq!(texts, words);
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Invalid));
    }

    #[test]
    fn extra_whitespace_does_not_change_kinds(
        words in prop::collection::vec((word(), separator()), 1..30)
    ) {
        let tight: Vec<&str> = words.iter().map(|(w, _)| w.as_str()).collect();
        let loose: String = words.iter().map(|(w, sep)| format!("{w}{sep}")).collect();

        let (a, _) = lex(tight.join(" ").as_bytes()).unwrap();
        let (b, _) = lex(loose.as_bytes()).unwrap();
        let kinds_a: Vec<TokenKind> = a.iter().map(|t| t.kind).collect();
        let kinds_b: Vec<TokenKind> = b.iter().map(|t| t.kind).collect();
        prop_assert_eq!(kinds_a, kinds_b);
    }

    #[test]
    fn relexing_a_token_keeps_its_kind(bytes in prop::collection::vec(any::<u8>(), 0..120)) {
        let (tokens, count) = lex(bytes.as_slice()).unwrap();
        for token in &tokens[..count] {
            if token.kind.is_comment() || token.kind == TokenKind::NoiseWord {
                continue;
            }
            let (again, again_count) = lex(token.text.as_bytes()).unwrap();
            prop_assert_eq!(again_count, 1, "{:?}", token);
            prop_assert_eq!(again[0].kind, token.kind);
        }
    }

    #[test]
    fn texts_rebuild_the_source_without_whitespace(source in "[ -;=-~\n]{0,200}") {
        let (tokens, count) = lex(source.as_bytes()).unwrap();
        let rebuilt: Vec<u8> = tokens[..count]
            .iter()
            .flat_map(|t| t.text.as_bytes().iter().copied())
            .collect();
        let squeezed: Vec<u8> = source.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
        prop_assert_eq!(rebuilt, squeezed);
    }
}
