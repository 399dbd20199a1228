//! Operator prompts
//!
//! A terminal gets `dialoguer` prompts; anything else (pipes, tests) is read
//! line by line. End of input while a prompt is pending means the operator
//! gave up, and is reported as an interruption.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::common::{Error, Result};

/// Source of operator answers
pub trait Prompter {
    /// Ask for a value; an empty answer yields `default` when one is given
    fn ask(&mut self, label: &str, default: Option<&str>) -> Result<String>;

    /// Block until the operator presses Enter
    fn pause(&mut self) -> Result<()>;
}

/// Pick the prompt backend that fits the current stdin
pub fn for_stdin() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}

/// Interactive prompts on a terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let mut input = dialoguer::Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text()?;
        Ok(apply_default(&answer, default))
    }

    fn pause(&mut self) -> Result<()> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(Error::Interrupted);
        }
        Ok(())
    }
}

/// Line-oriented prompts over any reader/writer pair
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::Prompt(e.to_string()))?;
        if read == 0 {
            return Err(Error::Interrupted);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => write!(self.writer, "{label} [{default}]: ")?,
            None => write!(self.writer, "{label}: ")?,
        }
        self.writer.flush()?;

        let line = self.read_line()?;
        Ok(apply_default(&line, default))
    }

    fn pause(&mut self) -> Result<()> {
        self.read_line().map(|_| ())
    }
}

fn apply_default(answer: &str, default: Option<&str>) -> String {
    let answer = answer.trim();
    match default {
        Some(default) if answer.is_empty() => default.to_string(),
        _ => answer.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_answer_is_trimmed() {
        let mut prompter = LinePrompter::new(Cursor::new("  abc  \n"), Vec::new());
        assert_eq!(prompter.ask("Key", None).unwrap(), "abc");
    }

    #[test]
    fn test_empty_answer_takes_default() {
        let mut prompter = LinePrompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("Service", Some("com.example")).unwrap(), "com.example");
    }

    #[test]
    fn test_empty_answer_without_default_stays_empty() {
        let mut prompter = LinePrompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("Key", None).unwrap(), "");
    }

    #[test]
    fn test_prompt_shows_default() {
        let mut out = Vec::new();
        {
            let mut prompter = LinePrompter::new(Cursor::new("x\n"), &mut out);
            prompter.ask("Service", Some("com.example")).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Service [com.example]: ");
    }

    #[test]
    fn test_end_of_input_is_interruption() {
        let mut prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        assert!(matches!(prompter.ask("Key", None), Err(Error::Interrupted)));
        assert!(matches!(prompter.pause(), Err(Error::Interrupted)));
    }
}
