use rustyline::{history::MemHistory, Editor};
use std::fmt;
use wordpass_password::Mode;

use crate::{helpers::messages, Result};

pub(crate) fn basic_editor() -> Result<Editor<(), MemHistory>> {
    Ok(Editor::<(), MemHistory>::with_history(
        Default::default(),
        MemHistory::new(),
    )?)
}

/// Value that can be entered at a prompt.
pub trait PromptValue: Sized + fmt::Display {
    /// Parse a trimmed, non-empty line of input.
    fn parse_input(input: &str) -> std::result::Result<Self, String>;
}

macro_rules! prompt_value_from_str {
    ($($t:ty),*) => {
        $(
            impl PromptValue for $t {
                fn parse_input(
                    input: &str,
                ) -> std::result::Result<Self, String> {
                    input.parse::<$t>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

prompt_value_from_str!(usize, Mode);

impl PromptValue for bool {
    fn parse_input(input: &str) -> std::result::Result<Self, String> {
        match input.to_lowercase().as_str() {
            "y" | "yes" | "true" => Ok(true),
            "n" | "no" | "false" => Ok(false),
            _ => Err(format!("'{}' is not a valid flag (y/n)", input)),
        }
    }
}

/// Prompt for a value until valid input is entered.
///
/// An empty line accepts the default, interrupting the
/// prompt returns an error.
pub fn prompt_value<T: PromptValue>(prompt: &str, default: T) -> Result<T> {
    let mut rl = basic_editor()?;
    let prompt =
        format!("{} (default: {}, Ctrl-C to cancel): ", prompt, default);
    loop {
        let line = rl.readline(&prompt)?;
        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }
        match T::parse_input(line) {
            Ok(value) => return Ok(value),
            Err(e) => messages::fail(format!(
                "invalid input: {}, please try again",
                e
            )),
        }
    }
}
