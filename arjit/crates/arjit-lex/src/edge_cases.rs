//! Edge case tests for arjit-lex

#[cfg(test)]
mod tests {
    use crate::{lex, lex_with, LexError, LexOptions, Token, TokenType};
    use arjit_util::{DiagnosticCode, Span};

    fn lenient(source: &str) -> Vec<Token<'_>> {
        lex_with(source, LexOptions::lenient()).unwrap().tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex("x").unwrap(), vec![Token::ident("x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1;", name);
        let tokens = lex(&source).unwrap();
        assert_eq!(tokens[1], Token::ident(&name));
    }

    #[test]
    fn test_edge_keyword_prefix_and_case() {
        assert_eq!(
            lex("Let LET letx").unwrap(),
            vec![Token::ident("Let"), Token::ident("LET"), Token::ident("letx")]
        );
    }

    #[test]
    fn test_edge_keyword_then_digit() {
        assert_eq!(
            lex("return1").unwrap(),
            vec![Token::fixed(TokenType::Return), Token::number(1)]
        );
    }

    #[test]
    fn test_edge_number_then_ident() {
        assert_eq!(lex("12ab").unwrap(), vec![Token::number(12), Token::ident("ab")]);
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex("007").unwrap(), vec![Token::number(7)]);
    }

    #[test]
    fn test_edge_u64_max() {
        assert_eq!(
            lex("18446744073709551615").unwrap(),
            vec![Token::number(u64::MAX)]
        );
    }

    #[test]
    fn test_edge_overflow_strict_and_lenient() {
        let source = "18446744073709551616";
        assert!(matches!(lex(source), Err(LexError::IntegerOverflow { .. })));

        let output = lex_with(source, LexOptions::lenient()).unwrap();
        assert_eq!(output.tokens, vec![Token::number(0)]);
        assert_eq!(
            output.diagnostics[0].code,
            Some(DiagnosticCode::W_LEXER_INTEGER_WRAPPED)
        );
    }

    #[test]
    fn test_edge_negative_is_two_tokens() {
        assert_eq!(
            lex("-5").unwrap(),
            vec![Token::fixed(TokenType::Minus), Token::number(5)]
        );
    }

    #[test]
    fn test_edge_no_decimals() {
        assert_eq!(
            lex("3.14").unwrap(),
            vec![Token::number(3), Token::fixed(TokenType::Dot), Token::number(14)]
        );
    }

    #[test]
    fn test_edge_double_equal_strict() {
        let err = lex("a == b").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: '=',
                span: Span::new(3, 4, 1, 4),
            }
        );
    }

    #[test]
    fn test_edge_double_equal_lenient() {
        let tokens = lenient("a == b");
        assert_eq!(
            tokens,
            vec![
                Token::ident("a"),
                Token::fixed(TokenType::Equal),
                Token::fixed(TokenType::Equal),
                Token::ident("b"),
            ]
        );
    }

    #[test]
    fn test_edge_spaced_equals_are_fine() {
        assert_eq!(lex("= =").unwrap().len(), 2);
    }

    #[test]
    fn test_edge_bang_equal_is_not_not_equal() {
        assert!(matches!(
            lex("a != b"),
            Err(LexError::UnexpectedCharacter { ch: '!', .. })
        ));

        let tokens = lenient("a != b");
        assert!(tokens.iter().all(|t| t.token_type() != TokenType::NotEqual));
        assert_eq!(tokens[1], Token::fixed(TokenType::Equal));
    }

    #[test]
    fn test_edge_unknown_characters_lenient() {
        let output = lex_with("a @#$ b", LexOptions::lenient()).unwrap();
        assert_eq!(output.tokens, vec![Token::ident("a"), Token::ident("b")]);
        assert_eq!(output.diagnostics.len(), 3);
        assert_eq!(output.diagnostics[1].span, Span::new(3, 4, 1, 4));
    }

    #[test]
    fn test_edge_underscore_is_unexpected() {
        assert!(matches!(
            lex("my_var"),
            Err(LexError::UnexpectedCharacter { ch: '_', .. })
        ));
        assert_eq!(lenient("my_var"), vec![Token::ident("my"), Token::ident("var")]);
    }

    #[test]
    fn test_edge_unicode_is_unexpected() {
        let err = lex("let π = 3;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: 'π',
                span: Span::new(4, 6, 1, 5),
            }
        );
        assert_eq!(lenient("let π = 3;").len(), 4);
    }

    #[test]
    fn test_edge_embedded_nul_is_a_character() {
        assert!(matches!(
            lex("a\0b"),
            Err(LexError::UnexpectedCharacter { ch: '\0', .. })
        ));
        assert_eq!(lenient("a\0b"), vec![Token::ident("a"), Token::ident("b")]);
    }

    #[test]
    fn test_edge_adjacent_punctuation() {
        let tokens = lex("(){},;.+-*/").unwrap();
        assert_eq!(tokens.len(), 11);
    }

    #[test]
    fn test_edge_strings_back_to_back() {
        assert_eq!(
            lex("\"a\"\"b\"").unwrap(),
            vec![Token::string("a"), Token::string("b")]
        );
    }

    #[test]
    fn test_edge_string_with_keyword_inside() {
        assert_eq!(lex("\"let\"").unwrap(), vec![Token::string("let")]);
    }

    #[test]
    fn test_edge_string_starting_with_space_per_mode() {
        assert_eq!(lex("\" hi\"").unwrap(), vec![Token::string(" hi")]);

        // The leading quote is skipped, then `hi` lexes, then the closing
        // quote hits end of input.
        let output = lex_with("\" hi\"", LexOptions::lenient()).unwrap();
        assert_eq!(output.tokens, vec![Token::ident("hi")]);
        assert_eq!(output.diagnostics.len(), 2);
    }

    #[test]
    fn test_edge_unterminated_string_in_statement() {
        let err = lex("let s = \"oops;\nlet t = 1;").unwrap_err();
        assert_eq!(err.span().map(|s| s.start), Some(8));
    }

    #[test]
    fn test_edge_crlf_whitespace() {
        assert_eq!(
            lex("let\r\nx").unwrap(),
            vec![Token::fixed(TokenType::Let), Token::ident("x")]
        );
    }

    #[test]
    fn test_edge_trailing_eof_only_when_requested() {
        assert!(lex("x").unwrap().iter().all(|t| t.token_type() != TokenType::Eof));

        let output = lex_with("x ", LexOptions::strict().with_eof(true)).unwrap();
        assert_eq!(output.tokens.last(), Some(&Token::eof()));
        assert_eq!(output.tokens.len(), 2);
    }
}
