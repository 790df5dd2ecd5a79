use lox_scan::{scan, ErrorKind, Literal, Token, TokenKind};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind().clone()).collect()
}

#[test]
fn whitespace_only_is_a_single_eof() {
    let result = scan(" \t\r\n  \n");
    assert_eq!(vec![TokenKind::EndOfFile], kinds(result.tokens()));
    assert_eq!(3, result.tokens()[0].line());
}

#[test]
fn small_program() {
    let source = "\
// greet someone
fun greet(name) {
  print \"Hello, \" + name;
}

var answer = 41.5 + 0.5;
if (answer >= 42 and !false) greet(\"world\");
";
    let result = scan(source);
    assert!(!result.had_error());

    use TokenKind::*;
    assert_eq!(
        vec![
            Fun, Identifier, ParenLeft, Identifier, ParenRight, BraceLeft,
            Print, String("Hello, ".into()), Plus, Identifier, SemiColon,
            BraceRight,
            Var, Identifier, Equal, Number(41.5), Plus, Number(0.5), SemiColon,
            If, ParenLeft, Identifier, GreaterEqual, Number(42.0), And, Bang, False, ParenRight,
            Identifier, ParenLeft, String("world".into()), ParenRight, SemiColon,
            EndOfFile,
        ],
        kinds(result.tokens())
    );

    let eof = result.tokens().last().unwrap();
    assert_eq!(8, eof.line());
}

#[test]
fn literals_are_exposed_by_kind() {
    let result = scan("\"text\" 2.5 name");
    let literals: Vec<Option<Literal>> = result.tokens().iter().map(Token::literal).collect();
    assert_eq!(
        vec![Some(Literal::Str("text")), Some(Literal::Number(2.5)), None, None],
        literals
    );
}

#[test]
fn every_problem_is_reported_in_one_pass() {
    let result = scan("a ^ b\n~\n\"never closed");
    let errors: Vec<(usize, &ErrorKind)> =
        result.errors().iter().map(|e| (e.line(), e.kind())).collect();
    assert_eq!(
        vec![
            (1, &ErrorKind::UnexpectedCharacter('^')),
            (2, &ErrorKind::UnexpectedCharacter('~')),
            (3, &ErrorKind::UnterminatedString),
        ],
        errors
    );
    assert_eq!(
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfFile],
        kinds(result.tokens())
    );
}

#[test]
fn rendering_is_kind_lexeme_literal() {
    let rendered: Vec<String> = scan("x = 3;").tokens().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        vec!["Identifier: x, ", "Equal: =, ", "Number: 3, 3.0", "SemiColon: ;, ", "EndOfFile: , "],
        rendered
    );
}
