use std::io::{self, Write};

/// Receives lexical errors as they are surfaced to the user.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

impl Reporter for Vec<(usize, String)> {
    fn report(&mut self, line: usize, message: &str) {
        self.push((line, message.to_string()));
    }
}

/// Writes `[line N] Error: message` lines and remembers whether anything
/// was reported since the last `reset`.
pub struct WriteReporter<W> {
    out: W,
    had_error: bool,
    io_error: Option<io::Error>,
}

impl <W: Write> WriteReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, had_error: false, io_error: None }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }

    /// The first write failure since the last call, if any.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl <W: Write> Reporter for WriteReporter<W> {
    fn report(&mut self, line: usize, message: &str) {
        self.had_error = true;
        if let Err(e) = writeln!(self.out, "[line {}] Error: {}", line, message) {
            self.io_error.get_or_insert(e);
        }
    }
}
