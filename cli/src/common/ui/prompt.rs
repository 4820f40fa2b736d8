//! # Parley Terminal Prompts
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! Line-oriented input and output helpers for the chat session.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{BufRead, Write};

/// Reads one line from `input`, stripping the trailing newline.
///
/// Returns `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Writes `text` without a newline, flushes, and reads the reply line.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text).context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;
    read_line(input)
}

/// Prints `speaker: message` on its own line.
pub fn say<W: Write>(output: &mut W, speaker: &str, message: &str) -> Result<()> {
    writeln!(output, "{}: {}", speaker, message).context("Failed to write message")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut input = Cursor::new("hello there\r\nsecond\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("hello there"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_line_without_trailing_newline() {
        let mut input = Cursor::new("last line");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last line"));
    }

    #[test]
    fn test_ask_writes_prompt_before_reading() {
        let mut input = Cursor::new("42\n");
        let mut output = Vec::new();
        let answer = ask(&mut input, &mut output, "You: ").unwrap();
        assert_eq!(answer.as_deref(), Some("42"));
        assert_eq!(String::from_utf8(output).unwrap(), "You: ");
    }

    #[test]
    fn test_say_formats_speaker() {
        let mut output = Vec::new();
        say(&mut output, "Bot", "Hello there!").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Bot: Hello there!\n");
    }
}
