//! Coloured line-oriented console over arbitrary reader/writer handles.
//!
//! The interactive menu and the input prompts talk to a [`Console`] rather
//! than to stdin/stdout directly, so tests drive them with in-memory
//! buffers.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result, bail};
use crossterm::style::{Color, Stylize};
use crossterm::{cursor, queue, terminal};

/// Colour roles used across the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Prompt,
    Error,
    Success,
    Info,
    Heading,
    Farewell,
}

impl Tone {
    const fn color(self) -> Color {
        match self {
            Self::Prompt => Color::Yellow,
            Self::Error => Color::Red,
            Self::Success => Color::Green,
            Self::Info => Color::Blue,
            Self::Heading => Color::Magenta,
            Self::Farewell => Color::Cyan,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    /// Emit colours and clear the screen. Off for pipes and tests.
    styled: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin/stdout, styled when stdout is a TTY.
    #[must_use]
    pub fn stdio() -> Self {
        use crossterm::tty::IsTty as _;
        let output = io::stdout();
        let styled = output.is_tty();
        Self::new(io::stdin().lock(), output, styled)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            output,
            styled,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line in the given tone.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn line(&mut self, tone: Tone, text: impl Display) -> Result<()> {
        if self.styled {
            let styled = text.to_string().with(tone.color());
            let styled = if tone == Tone::Heading { styled.bold() } else { styled };
            writeln!(self.output, "{styled}")?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        Ok(())
    }

    /// A blank line.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Show `prompt` and read one line, without the trailing newline.
    ///
    /// # Errors
    /// Returns an error on I/O failure or when input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        if self.styled {
            write!(self.output, "{}", prompt.with(Tone::Prompt.color()))?;
        } else {
            write!(self.output, "{prompt}")?;
        }
        self.output.flush()?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("input closed while waiting for: {}", prompt.trim());
        }
        if !self.styled {
            // Keep transcripts readable when input is not echoed by a terminal.
            writeln!(self.output)?;
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Clear the terminal. No-op when unstyled.
    ///
    /// # Errors
    /// Returns an error if the terminal commands cannot be written.
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.styled {
            queue!(
                self.output,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
            self.output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new(), false)
    }

    fn output(c: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut c = console("first\r\nsecond\n");
        assert_eq!(c.prompt("> ").unwrap(), "first");
        assert_eq!(c.prompt("> ").unwrap(), "second");
        assert_eq!(output(c), "> \n> \n");
    }

    #[test]
    fn prompt_fails_at_end_of_input() {
        let mut c = console("");
        let err = c.prompt("Choice: ").unwrap_err();
        assert!(err.to_string().contains("Choice:"));
    }

    #[test]
    fn unstyled_lines_are_plain() {
        let mut c = console("");
        c.line(Tone::Error, "bad").unwrap();
        c.clear_screen().unwrap();
        c.blank().unwrap();
        assert_eq!(output(c), "bad\n\n");
    }

    #[test]
    fn styled_lines_carry_escape_codes() {
        let mut c = Console::new(&b""[..], Vec::new(), true);
        c.line(Tone::Success, "ok").unwrap();
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("ok"));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(out.contains('\u{1b}'));
        }
    }
}
