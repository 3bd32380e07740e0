pub mod command;
pub mod run;

use crate::prelude::AppError;
use command::Command;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\nContact Manager")?;
    for (key, command) in Command::MENU {
        writeln!(out, "{}. {}", key, command.label())?;
    }
    prompt(out, "Choose option: ")
}

pub fn prompt<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    write!(out, "{}", message)?;
    out.flush()?;
    Ok(())
}

// INPUT FUNCTIONS

/// Reads one line, trimmed. `None` means the input is exhausted.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = Vec::new();

    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Shows `message` then reads the answer.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>, AppError> {
    prompt(out, message)?;
    get_input(input)
}
