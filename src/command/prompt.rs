//! Line-oriented prompts and strict number parsing

use crate::core::error::{Result, SkirmishError};
use std::io::{BufRead, Write};

/// Print `msg`, then read one line with the trailing newline stripped.
///
/// End of input yields an empty string.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, msg: &str) -> Result<String> {
    write!(output, "{}", msg)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::warn!("Error reading input: end of stream");
        return Ok(String::new());
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Parse a decimal `u32`.
///
/// Rejects empty text, signs, whitespace and any trailing garbage, and
/// values above `u32::MAX`.
pub fn parse_u32(text: &str) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SkirmishError::InvalidNumber(text.to_string()));
    }
    // Only digits remain, so the sole failure mode is overflow
    text.parse::<u32>()
        .map_err(|_| SkirmishError::NumberOutOfRange(text.to_string()))
}
