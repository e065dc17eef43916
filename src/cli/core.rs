//! Core CLI loop, dispatch, and shell context helpers.

use std::io;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use strsim::levenshtein;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    config::{ConfigManager, WalletConfig},
    errors::LedgerError,
    ledger::{Category, Ledger},
    storage::{JsonStore, SnapshotStore},
};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Fatal shell failures that abort the CLI loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}

/// Per-command failures reported to the user without leaving the loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

pub struct ShellContext {
    mode: CliMode,
    pub(crate) registry: CommandRegistry,
    theme: ColorfulTheme,
    storage: Box<dyn SnapshotStore>,
    config_manager: ConfigManager,
    pub(crate) config: WalletConfig,
    pub(crate) ledger: Ledger,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let storage = JsonStore::new_default()?;
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;

        let ledger = match storage.load()? {
            Some(snapshot) => snapshot,
            None => {
                tracing::info!(
                    "No snapshot found; starting wallet at {}",
                    config.starting_balance
                );
                Ledger::with_balance(config.starting_balance)
            }
        };

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            storage: Box::new(storage),
            config_manager,
            config,
            ledger,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        "wallet> ".to_string()
    }

    /// Writes the current ledger to disk. The in-memory state is already
    /// committed, so a failed write only logs and warns.
    pub(crate) fn persist_ledger(&self) {
        if let Err(err) = self.storage.save(&self.ledger) {
            tracing::warn!("Snapshot write failed: {err}");
            cli_io::print_warning(format!("Could not save wallet snapshot: {err}"));
        }
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn config_path(&self) -> String {
        self.config_manager.path().display().to_string()
    }

    pub(crate) fn format_amount(&self, amount: f64) -> String {
        format!("{}{amount:.2}", self.config.currency_symbol)
    }

    pub(crate) fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.config.date_format).to_string()
    }

    /// Resolves a 1-based position, as printed by `expense list`, to the
    /// id of the transaction at that position.
    pub(crate) fn expense_id_at(&self, raw: &str) -> Result<Uuid, CommandError> {
        let position: usize = raw.trim().parse().map_err(|_| {
            CommandError::InvalidArguments(format!(
                "`{raw}` is not a list position. Use `expense list` to see positions."
            ))
        })?;
        position
            .checked_sub(1)
            .and_then(|index| self.ledger.transactions.get(index))
            .map(|txn| txn.id)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!("No expense at position {position}."))
            })
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", false).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Ledger(inner) => {
                self.report_ledger_error(&inner);
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    /// Maps ledger rejections to the severity the UI tags them with:
    /// missing or malformed input is a warning, an overdraft is an error.
    pub(crate) fn report_ledger_error(&self, err: &LedgerError) {
        match err {
            LedgerError::MissingFields | LedgerError::InvalidAmount => {
                self.print_warning(&err.to_string());
            }
            LedgerError::InsufficientBalance { .. } => {
                self.print_error(&err.to_string());
            }
            LedgerError::NotFound(_) => {
                self.print_error(&err.to_string());
                cli_io::print_hint("Use `expense list` to see current positions.");
            }
            other => self.print_error(&other.to_string()),
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn prompt_title(&self, existing: Option<&str>) -> Result<String, CommandError> {
        let mut builder = Input::<String>::with_theme(&self.theme).with_prompt("Title");
        if let Some(existing) = existing {
            builder = builder.with_initial_text(existing);
        }
        let title = builder
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Title cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(title)
    }

    pub(crate) fn prompt_amount(
        &self,
        prompt: &str,
        default: Option<f64>,
    ) -> Result<f64, CommandError> {
        let mut builder = Input::<f64>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(value) = default {
            builder = builder.default(value);
        }
        let amount = builder
            .validate_with(|input: &f64| {
                if input.is_finite() && *input > 0.0 {
                    Ok(())
                } else {
                    Err("Amount must be greater than 0")
                }
            })
            .interact_text()?;
        Ok(amount)
    }

    pub(crate) fn select_category(
        &self,
        default: Option<Category>,
    ) -> Result<Category, CommandError> {
        let names: Vec<&str> = Category::ALL.iter().map(|category| category.name()).collect();
        let default_index = default
            .and_then(|category| Category::ALL.iter().position(|known| *known == category))
            .unwrap_or(0);
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Category")
            .items(&names)
            .default(default_index)
            .interact()?;
        Ok(Category::ALL[choice])
    }

    pub(crate) fn prompt_date(
        &self,
        existing: Option<NaiveDate>,
    ) -> Result<Option<NaiveDate>, CommandError> {
        let initial = existing
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let raw: String = Input::with_theme(&self.theme)
            .with_prompt("Date (YYYY-MM-DD, blank for none)")
            .with_initial_text(initial)
            .allow_empty(true)
            .validate_with(|input: &String| {
                let trimmed = input.trim();
                if trimmed.is_empty() || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok() {
                    Ok(())
                } else {
                    Err("Use YYYY-MM-DD or leave blank")
                }
            })
            .interact_text()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
        }
    }
}

/// Parses a date argument in ISO `YYYY-MM-DD` form.
pub(crate) fn parse_date_arg(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a date. Use YYYY-MM-DD."))
    })
}
