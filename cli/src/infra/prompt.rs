//! Terminal prompt — one line of stdin per question.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::ports::Prompt;

/// Production prompt backed by stdin/stdout.
pub struct StdioPrompt;

impl Prompt for StdioPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        let mut line = String::new();
        let n = std::io::stdin().lock().read_line(&mut line)?;
        anyhow::ensure!(n > 0, "no input provided");
        Ok(line.trim().to_string())
    }
}
