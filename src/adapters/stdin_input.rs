//! Terminal input for human players.

use std::io::{self, BufRead, Write};

use crate::{Error, Result, ports::InputSource};

/// Reads moves from standard input, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinInput {
    fn read_move(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}").map_err(|source| Error::Io {
            operation: "write prompt".to_string(),
            source,
        })?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read move from stdin".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
