//! Line-oriented interactive input and output.
//!
//! Reads never fail: a closed stream, a read error or invalid UTF-8 all
//! degrade to an empty line, which callers treat as "no selection". Writes
//! do fail, and those errors are propagated.

use std::io::{BufRead, Read, Write};

use log::warn;

use crate::error::Result;

/// Longest line accepted from the input, in bytes. The rest of a longer line
/// is discarded.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line and returns it trimmed of surrounding whitespace.
    pub fn read_string(&mut self) -> String {
        let mut line = Vec::new();

        let read = (&mut self.input)
            .take(MAX_LINE_LENGTH as u64)
            .read_until(b'\n', &mut line);

        if let Err(e) = read {
            warn!("Could not read input: {e}");
            return String::new();
        }

        let truncated = line.len() == MAX_LINE_LENGTH && !line.ends_with(b"\n");
        if truncated {
            warn!("Input line longer than {MAX_LINE_LENGTH} bytes, discarding the rest");
            self.discard_rest_of_line();
        }

        decode_line(line, truncated).trim().to_string()
    }

    /// Reads one line and returns its first character, if any.
    pub fn read_char(&mut self) -> Option<char> {
        self.read_string().chars().next()
    }

    /// Writes `prompt` without a newline and reads the answer.
    pub fn prompt_string(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.read_string())
    }

    /// Writes `prompt` without a newline and reads a single character.
    pub fn prompt_char(&mut self, prompt: &str) -> Result<Option<char>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.read_char())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Gives back the output stream, for inspecting what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn discard_rest_of_line(&mut self) {
        loop {
            let (consumed, found_newline) = match self.input.fill_buf() {
                Ok([]) => return,
                Ok(buffer) => match buffer.iter().position(|&byte| byte == b'\n') {
                    Some(newline) => (newline + 1, true),
                    None => (buffer.len(), false),
                },
                Err(e) => {
                    warn!("Could not read input: {e}");
                    return;
                }
            };

            self.input.consume(consumed);

            if found_newline {
                return;
            }
        }
    }
}

/// Decodes a raw input line. A character cut in half by the length cap is
/// dropped; any other invalid UTF-8 makes the whole line empty.
fn decode_line(line: Vec<u8>, truncated: bool) -> String {
    match String::from_utf8(line) {
        Ok(line) => line,
        Err(e) if truncated && e.utf8_error().error_len().is_none() => {
            let valid_up_to = e.utf8_error().valid_up_to();
            let mut bytes = e.into_bytes();
            bytes.truncate(valid_up_to);
            String::from_utf8(bytes).unwrap_or_default()
        }
        Err(e) => {
            warn!("Input is not valid UTF-8: {e}");
            String::new()
        }
    }
}
