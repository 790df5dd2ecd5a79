use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{report::WriteReporter, scanner::Scanner};

/// Process exit codes, following the sysexits convention.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExitStatus {
    Success,
    Usage,
    DataError,
    NoInput,
    IoErr,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 64,
            ExitStatus::DataError => 65,
            ExitStatus::NoInput => 66,
            ExitStatus::IoErr => 74,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RunError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunError::Read { .. } => ExitStatus::NoInput,
            RunError::Io(_) => ExitStatus::IoErr,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            RunError::Read { source, .. } => source.kind(),
            RunError::Io(e) => e.kind(),
        }
    }
}

impl From<RunError> for io::Error {
    fn from(e: RunError) -> io::Error {
        match e {
            RunError::Io(e) => e,
            e => io::Error::new(e.kind(), e),
        }
    }
}

/// Scans sources and prints their tokens, one per line.
pub struct Lox<Out, ErrOut> {
    out: Out,
    reporter: WriteReporter<ErrOut>,
}

impl <Out: Write, ErrOut: Write> Lox<Out, ErrOut> {
    pub fn new(out: Out, err_out: ErrOut) -> Self {
        Self {
            out,
            reporter: WriteReporter::new(err_out),
        }
    }

    pub fn had_error(&self) -> bool {
        self.reporter.had_error()
    }

    pub fn run(&mut self, source: &str) -> io::Result<()> {
        let scan = Scanner::new(source).scan_tokens();

        scan.report_to(&mut self.reporter);
        if let Some(e) = self.reporter.take_io_error() {
            return Err(e);
        }

        for token in scan.tokens() {
            writeln!(self.out, "{}", token)?;
        }
        self.out.flush()
    }

    /// A script that can't be read is a `RunError::Read`; failing to write
    /// tokens or errors is a `RunError::Io`.
    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ExitStatus, RunError> {
        let path = path.as_ref();
        info!(path = %path.display(), "scanning file");

        let contents = fs::read_to_string(path).map_err(|source| RunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.run(contents.as_str())?;

        if self.had_error() {
            Ok(ExitStatus::DataError)
        } else {
            Ok(ExitStatus::Success)
        }
    }

    /// Reads and scans one line at a time until end of input or `quit`.
    /// Errors on one line don't carry over to the next.
    pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        writeln!(self.out, "Welcome to lox-scan")?;
        writeln!(self.out, "Enter command or 'quit' to exit")?;

        let mut buffer = String::new();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            buffer.clear();

            let num_bytes = input.read_line(&mut buffer)?;
            if num_bytes == 0 { break };

            let line = buffer.trim_end_matches(&['\r', '\n'][..]);
            if line == "quit" {
                debug!("quit requested");
                break;
            }

            self.reporter.reset();
            self.run(line)?;
        }

        Ok(())
    }

    pub fn into_inner(self) -> (Out, ErrOut) {
        (self.out, self.reporter.into_inner())
    }
}
