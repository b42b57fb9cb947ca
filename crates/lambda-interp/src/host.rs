//! The driver's view of the outside world, and the stream realisation.

use std::io::{self, BufRead, Write};

/// Abstract I/O for one interpreter session.
///
/// The driver interacts with its host only through these four operations;
/// everything else (prompts, buffering, line editing) is the host's
/// business.
pub trait Host {
    /// Read one logical line, joining backslash-continued physical lines.
    fn read(&mut self) -> String;

    /// Print an evaluation result.
    fn print(&mut self, message: &str);

    /// Print a diagnostic.
    fn print_error(&mut self, message: &str);

    /// True once the input is exhausted.
    fn at_end(&mut self) -> bool;
}

/// If the last non-whitespace character of `source` is a backslash, the
/// line continues: returns the source truncated to just before the
/// backslash. Trailing whitespace after the backslash is dropped with it.
pub fn continuation_prefix(source: &str) -> Option<&str> {
    source
        .trim_end_matches([' ', '\t', '\r', '\n', '\x0B'])
        .strip_suffix('\\')
}

/// [`Host`] over buffered reader and writer streams: include files, piped
/// stdin, and the CLI's synthesised instruction stream.
pub struct StreamHost<R, W, E> {
    input: R,
    output: W,
    error: E,
    exhausted: bool,
}

impl<R: BufRead> StreamHost<R, io::Stdout, io::Stderr> {
    /// A host reading from `input` and writing to the process's stdout and
    /// stderr, as include-file sub-drivers do.
    pub fn stdio(input: R) -> Self {
        Self::new(input, io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> StreamHost<R, W, E> {
    pub fn new(input: R, output: W, error: E) -> Self {
        Self {
            input,
            output,
            error,
            exhausted: false,
        }
    }

    /// The output and error writers, for tests that capture them.
    pub fn into_writers(self) -> (W, E) {
        (self.output, self.error)
    }

    fn read_physical_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.exhausted = true;
                return None;
            }
            Ok(_) => {}
        }
        // A line without a terminator means the stream ended mid-line.
        if !line.ends_with('\n') {
            self.exhausted = true;
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Some(line)
    }
}

impl<R: BufRead, W: Write, E: Write> Host for StreamHost<R, W, E> {
    fn read(&mut self) -> String {
        let mut source = String::new();
        while !self.exhausted {
            let Some(line) = self.read_physical_line() else {
                break;
            };
            source.push_str(&line);
            match continuation_prefix(&source) {
                Some(prefix) => source.truncate(prefix.len()),
                None => break,
            }
        }
        source
    }

    fn print(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
    }

    fn print_error(&mut self, message: &str) {
        let _ = writeln!(self.error, "{message}");
    }

    fn at_end(&mut self) -> bool {
        self.exhausted
    }
}
