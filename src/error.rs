use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Failed parsing numeric value '{0}'")]
    NumericDecodeFailure(String),
}

/// A lexical error. None of these stop a scan.
#[derive(Debug, PartialEq, Clone, Error)]
#[error("[line {line}] Error: {kind}")]
pub struct Error {
    line: usize,
    kind: ErrorKind,
}

impl Error {
    pub fn unexpected_character(line: usize, c: char) -> Error {
        Error { line, kind: ErrorKind::UnexpectedCharacter(c) }
    }

    pub fn unterminated_string(line: usize) -> Error {
        Error { line, kind: ErrorKind::UnterminatedString }
    }

    pub fn numeric_decode_failure<S: Into<String>>(line: usize, text: S) -> Error {
        Error { line, kind: ErrorKind::NumericDecodeFailure(text.into()) }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// The message without the `[line N] Error:` prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(InvalidData, e)
    }
}
