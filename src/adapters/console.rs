use crate::domain::ports::{IntSource, Reporter};
use crate::utils::error::{LoopError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Reads whitespace-delimited integers, keeping leftover tokens from the current line.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(LoopError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead> IntSource for TokenReader<R> {
    fn next_int(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        token.parse::<i64>().map_err(|_| LoopError::ParseError { token })
    }
}

#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}
