use crate::core::command::Command;
use crate::core::query::QueryEngine;
use crate::core::tokenizer::{split, COMMAND_DELIMITER};
use crate::domain::model::GolfIndex;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const DEFAULT_PROMPT: &str = "> ";

/// Read-eval loop over a loaded index.
pub struct Session<'a> {
    engine: QueryEngine<'a>,
    prompt: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: usize,
    pub failures: usize,
}

impl<'a> Session<'a> {
    pub fn new(index: &'a GolfIndex) -> Self {
        Self::with_prompt(index, DEFAULT_PROMPT)
    }

    pub fn with_prompt(index: &'a GolfIndex, prompt: impl Into<String>) -> Self {
        Self {
            engine: QueryEngine::new(index),
            prompt: prompt.into(),
        }
    }

    /// Runs until `quit` or end of input. Reports go to `out`, one diagnostic
    /// line per failed command goes to `err`. Only I/O failures end the loop
    /// early.
    pub fn run<R, O, E>(&self, input: R, out: &mut O, err: &mut E) -> Result<SessionStats>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut stats = SessionStats::default();
        let mut lines = input.lines();

        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            let line = match next_command_line(&mut lines)? {
                Some(line) => line,
                None => {
                    tracing::debug!("End of input, closing session");
                    break;
                }
            };

            let words = split(&line, COMMAND_DELIMITER);
            stats.commands += 1;

            let outcome = Command::parse(&words).and_then(|command| {
                if command == Command::Quit {
                    return Ok(None);
                }
                tracing::debug!("Running {}", command.name());
                command.execute(&self.engine).map(Some)
            });

            match outcome {
                Ok(Some(report)) => write!(out, "{}", report)?,
                Ok(None) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    stats.failures += 1;
                    tracing::debug!("Command failed: {}", e);
                    writeln!(err, "{}", e.user_friendly_message())?;
                }
            }
        }

        out.flush()?;
        Ok(stats)
    }
}

/// Next line with leading whitespace removed, skipping blank lines.
fn next_command_line<I>(lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line?;
        let trimmed = line.trim_start().trim_end_matches('\r');
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
    Ok(None)
}
