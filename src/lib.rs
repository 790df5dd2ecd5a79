pub mod error;
pub mod lox;
pub mod report;
pub mod scanner;
pub mod token;

pub use crate::{
    error::{Error, ErrorKind, Result},
    report::{Reporter, WriteReporter},
    scanner::{Scan, Scanner},
    token::{Literal, Token, TokenKind},
};

/// Scans `source` in one pass, collecting tokens and lexical errors.
pub fn scan(source: &str) -> Scan {
    Scanner::new(source).scan_tokens()
}
