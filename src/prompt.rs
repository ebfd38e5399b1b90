use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use lifegrid::Pattern;

/// Interactive questions for anything missing from the command line
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks for a grid dimension
    ///
    /// Zero is accepted here and rejected when the grid is built.
    pub fn dimension(&mut self, question: &str) -> anyhow::Result<usize> {
        let answer = self.ask(question)?;
        answer
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{:?} is not a valid size", answer))
    }

    /// Asks a y/n question; anything but `y` means no
    pub fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.ask(question)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Reads exactly `height` pattern rows, each at most `width` cells long
    pub fn pattern(&mut self, width: usize, height: usize) -> anyhow::Result<Pattern> {
        writeln!(
            self.output,
            "Enter the initial state row by row (use 'X' for alive cells and '-' for dead cells):"
        )?;
        self.output.flush()?;

        let mut rows = Vec::with_capacity(height);
        for _ in 0..height {
            rows.push(self.read_line()?);
        }
        Ok(Pattern::parse_rows(&rows, Some(width))?)
    }
}
