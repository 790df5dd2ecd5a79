use crate::{
    error::{Error, Result},
    report::Reporter,
    token::{Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::{iter::FusedIterator, str::CharIndices};
use tracing::{debug, trace};

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Splits a source string into tokens.
///
/// Iterating yields one item per token or lexical error, in source order. A
/// malformed lexeme never ends the scan: the error is yielded and scanning
/// picks up again after it. The last item is always the `EndOfFile` token.
pub struct Scanner<'a> {
    source: &'a str,
    chars: PeekMoreIterator<CharIndices<'a>>,
    // Byte offsets into `source`; start <= current <= source.len().
    start: usize,
    current: usize,
    line: usize,
    finished: bool,
    token_count: usize,
    error_count: usize,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        while !self.finished {
            self.start = self.current;

            let next_char = match self.advance() {
                Some(c) => c,
                None => {
                    self.finished = true;
                    debug!(
                        tokens = self.token_count,
                        errors = self.error_count,
                        line = self.line,
                        "finished scanning"
                    );
                    return Some(Ok(Token::eof(self.line)));
                },
            };

            match self.scan_token(next_char) {
                Some(Ok(token)) => {
                    trace!(kind = token.kind().name(), lexeme = token.lexeme(), line = token.line());
                    self.token_count += 1;
                    return Some(Ok(token));
                },
                Some(Err(e)) => {
                    debug!(line = e.line(), "{}", e.message());
                    self.error_count += 1;
                    return Some(Err(e));
                },
                None => continue,
            }
        }
        None
    }
}

impl <'a> FusedIterator for Scanner<'a> {}

impl <'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekmore(),
            start: 0,
            current: 0,
            line: 1,
            finished: false,
            token_count: 0,
            error_count: 0,
        }
    }

    pub fn scan_tokens(self) -> Scan {
        let mut scan = Scan::default();
        for item in self {
            match item {
                Ok(token) => scan.tokens.push(token),
                Err(e) => scan.errors.push(e),
            }
        }
        scan
    }

    fn scan_token(&mut self, c: char) -> Option<Result<Token>> {
        use TokenKind::*;
        let kind = match c {
            '(' => ParenLeft,
            ')' => ParenRight,
            '{' => BraceLeft,
            '}' => BraceRight,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => SemiColon,
            '*' => Star,
            '!' => if self.does_next_match('=') { BangEqual } else { Bang },
            '=' => if self.does_next_match('=') { EqualEqual } else { Equal },
            '<' => if self.does_next_match('=') { LessEqual } else { Less },
            '>' => if self.does_next_match('=') { GreaterEqual } else { Greater },
            '/' => {
                if self.does_next_match('/') { // is this a comment?
                    self.advance_while(|n| n != '\n');
                    return None;
                }
                Slash
            },
            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.line += 1;
                return None;
            },
            '"' => return Some(self.extract_string()),
            c if c.is_ascii_digit() => return Some(self.extract_number()),
            c if can_start_identifier(c) => return Some(Ok(self.extract_identifier())),
            c => return Some(Err(Error::unexpected_character(self.line, c))),
        };
        Some(Ok(self.make_token(kind)))
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.line)
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn advance(&mut self) -> Option<char> {
        let (offset, c) = self.chars.next()?;
        self.current = offset + c.len_utf8();
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_second(&mut self) -> Option<char> {
        self.chars.peek_nth(1).map(|&(_, c)| c)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, should_continue: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !should_continue(c) {
                break;
            }
            self.advance();
        }
    }

    fn extract_string(&mut self) -> Result<Token> {
        let first_line = self.line;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.advance().is_none() {
            return Err(Error::unterminated_string(self.line));
        }

        let lexeme = self.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        Ok(Token::string(lexeme, first_line, value))
    }

    fn extract_number(&mut self) -> Result<Token> {
        self.advance_while(|n| n.is_ascii_digit());

        let has_fraction = self.peek() == Some('.')
            && self.peek_second().map_or(false, |n| n.is_ascii_digit());
        if has_fraction {
            self.advance();
            self.advance_while(|n| n.is_ascii_digit());
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Token::number(text, self.line, number)),
            _ => Err(Error::numeric_decode_failure(self.line, text)),
        }
    }

    fn extract_identifier(&mut self) -> Token {
        self.advance_while(is_part_of_valid_identifier);

        let text = self.lexeme();
        match KEYWORDS.get(text) {
            Some(kind) => self.make_token(kind.clone()),
            None => self.make_token(TokenKind::Identifier),
        }
    }
}

fn can_start_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_part_of_valid_identifier(c: char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}

/// The outcome of scanning one source string.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Scan {
    tokens: Vec<Token>,
    errors: Vec<Error>,
}

impl Scan {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn report_to<R: Reporter + ?Sized>(&self, reporter: &mut R) {
        for e in self.errors.iter() {
            reporter.report(e.line(), &e.message());
        }
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<Error>) {
        (self.tokens, self.errors)
    }
}
