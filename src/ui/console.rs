//! Line-based console I/O.
//!
//! [`Console`] is the only way the game talks to the player. The terminal
//! implementation uses crossterm for clearing and colour; the scripted one
//! replays queued input and records everything written, for tests.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// How a line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Good,
    Bad,
    Info,
}

pub trait Console {
    /// Reads one line without its trailing newline. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
    fn write_line(&mut self, text: &str, tone: Tone) -> io::Result<()>;
    /// Writes `text` without a newline, leaving the cursor after it.
    fn write_prompt(&mut self, text: &str) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
    /// Holds the screen so the player can read what was just printed.
    fn pause(&mut self) -> io::Result<()>;
}

/// The real terminal: stdin and stdout.
pub struct TerminalConsole {
    clear_screen: bool,
    pause_after_messages: bool,
}

impl TerminalConsole {
    pub fn new(clear_screen: bool, pause_after_messages: bool) -> Self {
        Self {
            clear_screen,
            pause_after_messages,
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match tone {
            Tone::Plain => writeln!(stdout, "{}", text),
            Tone::Heading => writeln!(stdout, "{}", text.bold()),
            Tone::Good => writeln!(stdout, "{}", text.green()),
            Tone::Bad => writeln!(stdout, "{}", text.red()),
            Tone::Info => writeln!(stdout, "{}", text.cyan()),
        }
    }

    fn write_prompt(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", text)?;
        stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.clear_screen {
            return writeln!(io::stdout());
        }
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn pause(&mut self) -> io::Result<()> {
        if !self.pause_after_messages {
            return Ok(());
        }
        self.write_prompt(&format!("{}", "Press Enter to continue...".dark_grey()))?;
        // End of input just means there is nothing to wait for.
        self.read_line().map(|_| ())
    }
}

/// Replays scripted input lines and records output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    clears: usize,
    pauses: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Every line and prompt written so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn output_text(&self) -> String {
        self.output.join("\n")
    }

    /// Number of output entries containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, text: &str, _tone: Tone) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn write_prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.pauses += 1;
        Ok(())
    }
}
