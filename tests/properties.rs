use lox_scan::{scan, TokenKind};
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,5}(\\.[0-9]{1,3})?",
        "\"[a-z ]{0,6}\"",
        prop::sample::select(vec![
            "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "/",
            "!", "!=", "=", "==", "<", "<=", ">", ">=",
        ])
        .prop_map(String::from),
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t\r\n]{1,3}",
        "[ \t]{1,2}//[a-z ]{0,10}\n",
    ]
}

proptest! {
    #[test]
    fn whitespace_only_scans_to_eof(source in "[ \t\r\n]{0,40}") {
        let result = scan(&source);
        prop_assert_eq!(1, result.tokens().len());
        prop_assert_eq!(&TokenKind::EndOfFile, result.tokens()[0].kind());
        prop_assert!(!result.had_error());
    }

    #[test]
    fn exactly_one_trailing_eof(source in "\\PC{0,60}") {
        let result = scan(&source);
        let tokens = result.tokens();
        prop_assert_eq!(&TokenKind::EndOfFile, tokens.last().unwrap().kind());
        let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(1, eof_count);
    }

    #[test]
    fn lexemes_cover_the_source(
        pieces in prop::collection::vec((fragment(), separator()), 0..20)
    ) {
        let source: String = pieces.iter().map(|(f, s)| format!("{}{}", f, s)).collect();
        let expected: String = pieces.iter().map(|(f, _)| f.as_str()).collect();

        let result = scan(&source);
        prop_assert!(!result.had_error());

        let lexemes: String = result.tokens().iter().map(|t| t.lexeme()).collect();
        prop_assert_eq!(expected, lexemes);
    }

    #[test]
    fn eof_line_counts_newlines(source in "[a-z0-9 +\n]{0,60}") {
        let result = scan(&source);
        let newlines = source.matches('\n').count();
        prop_assert_eq!(newlines + 1, result.tokens().last().unwrap().line());
    }
}
