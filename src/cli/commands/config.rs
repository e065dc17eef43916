use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change wallet settings",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_ascii_lowercase()).as_deref() {
        Some("show") | None => show(context),
        Some("set") => set(context, &args[1..]),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Use show or set."
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    cli_io::print_info(format!(
        "{:<18} {}",
        "Currency symbol", context.config.currency_symbol
    ));
    cli_io::print_info(format!(
        "{:<18} {}",
        "Starting balance",
        context.format_amount(context.config.starting_balance)
    ));
    cli_io::print_info(format!(
        "{:<18} {}",
        "Date format", context.config.date_format
    ));
    cli_io::print_info(format!("{:<18} {}", "Config file", context.config_path()));
    Ok(())
}

fn set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(key), Some(value)) = (args.first(), args.get(1)) else {
        return Err(CommandError::InvalidArguments(
            "Usage: config set <currency|starting-balance|date-format> <value>".to_string(),
        ));
    };

    match key.to_ascii_lowercase().as_str() {
        "currency" => {
            context.config.currency_symbol = value.to_string();
        }
        "starting-balance" => {
            let amount: f64 = value.parse().map_err(|_| {
                CommandError::InvalidArguments("Starting balance must be a number".to_string())
            })?;
            if !amount.is_finite() || amount < 0.0 {
                return Err(CommandError::InvalidArguments(
                    "Starting balance must be zero or more".to_string(),
                ));
            }
            context.config.starting_balance = amount;
            cli_io::print_info("New wallets use this balance. Existing snapshots are untouched.");
        }
        "date-format" => {
            context.config.date_format = value.to_string();
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "Unknown config key `{other}`. Use currency, starting-balance, or date-format."
            )));
        }
    }

    context.persist_config()?;
    cli_io::print_success(format!("Updated {key}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::tests::test_context;

    #[test]
    fn set_rejects_negative_starting_balance() {
        let (mut context, _dir) = test_context();
        let err = context
            .dispatch("config", "config", &["set", "starting-balance", "-10"])
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert_eq!(context.config.starting_balance, 5000.0);
    }

    #[test]
    fn set_currency_persists_to_disk() {
        let (mut context, dir) = test_context();
        context
            .dispatch("config", "config", &["set", "currency", "$"])
            .unwrap();
        assert_eq!(context.config.currency_symbol, "$");

        let manager =
            crate::config::ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let reloaded = manager.load().unwrap();
        assert_eq!(reloaded.currency_symbol, "$");
    }
}
