use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Line-oriented writer for the lesson output.
pub struct Transcript<W: Write> {
    out: W,
    styled: bool,
    lines: usize,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            styled: false,
            lines: 0,
        }
    }

    /// Headings are bold when styled; everything else is plain text.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.lines += 1;
        Ok(())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            self.line(text.bold().cyan())
        } else {
            self.line(text)
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
