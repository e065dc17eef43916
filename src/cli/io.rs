use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::core::CommandError;
use crate::cli::output::{self, MessageKind};

/// Print a plain informational line.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning line.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error line.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success line.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Print a follow-up hint below an error or warning.
pub fn print_hint(message: impl fmt::Display) {
    output::print(MessageKind::Prompt, format!("Hint: {message}"));
}

/// Ask a yes/no question, returning the chosen answer.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
