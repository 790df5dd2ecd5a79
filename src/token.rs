use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    ParenLeft, ParenRight, BraceLeft, BraceRight,
    Comma, Dot, Minus, Plus, SemiColon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String(String), Number(f64),

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

/// The decoded value carried by `String` and `Number` tokens.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal<'a> {
    Str(&'a str),
    Number(f64),
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, line: usize) -> Token {
        Token { kind, lexeme: lexeme.into(), line }
    }

    pub fn string<S: Into<String>, V: Into<String>>(lexeme: S, line: usize, value: V) -> Token {
        Token::new(TokenKind::String(value.into()), lexeme, line)
    }

    pub fn number<S: Into<String>>(lexeme: S, line: usize, value: f64) -> Token {
        Token::new(TokenKind::Number(value), lexeme, line)
    }

    pub fn eof(line: usize) -> Token {
        Token::new(TokenKind::EndOfFile, "", line)
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn literal(&self) -> Option<Literal<'_>> {
        match &self.kind {
            TokenKind::String(s) => Some(Literal::Str(s)),
            TokenKind::Number(n) => Some(Literal::Number(*n)),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            ParenLeft => "ParenLeft",
            ParenRight => "ParenRight",
            BraceLeft => "BraceLeft",
            BraceRight => "BraceRight",
            Comma => "Comma",
            Dot => "Dot",
            Minus => "Minus",
            Plus => "Plus",
            SemiColon => "SemiColon",
            Slash => "Slash",
            Star => "Star",
            Bang => "Bang",
            BangEqual => "BangEqual",
            Equal => "Equal",
            EqualEqual => "EqualEqual",
            Greater => "Greater",
            GreaterEqual => "GreaterEqual",
            Less => "Less",
            LessEqual => "LessEqual",
            Identifier => "Identifier",
            String(_) => "String",
            Number(_) => "Number",
            And => "And",
            Class => "Class",
            Else => "Else",
            False => "False",
            Fun => "Fun",
            For => "For",
            If => "If",
            Nil => "Nil",
            Or => "Or",
            Print => "Print",
            Return => "Return",
            Super => "Super",
            This => "This",
            True => "True",
            Var => "Var",
            While => "While",
            EndOfFile => "EndOfFile",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{:?}", n),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, ", self.kind, self.lexeme)?;
        match self.literal() {
            Some(literal) => write!(f, "{}", literal),
            None => Ok(()),
        }
    }
}
