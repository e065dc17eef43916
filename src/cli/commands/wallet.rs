use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::parse_amount;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "balance",
            "Show the wallet balance and expense totals",
            "balance",
            cmd_balance,
        ),
        CommandEntry::new("income", "Add income to the wallet", "income [amount]", cmd_income),
    ]
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Wallet");
    cli_io::print_info(format!(
        "Balance:        {}",
        context.format_amount(context.ledger.balance)
    ));
    cli_io::print_info(format!(
        "Total expenses: {} across {} transaction(s)",
        context.format_amount(context.ledger.total_expenses()),
        context.ledger.transaction_count()
    ));
    Ok(())
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = match args.first() {
        Some(raw) => parse_amount(raw)?,
        None if context.mode() == CliMode::Interactive => {
            context.prompt_amount("Income amount", None)?
        }
        None => {
            return Err(CommandError::InvalidArguments(
                "Usage: income <amount>".to_string(),
            ))
        }
    };

    context.ledger.add_income(amount)?;
    context.persist_ledger();
    cli_io::print_success(format!("Income added: {}", context.format_amount(amount)));
    cli_io::print_info(format!(
        "Balance is now {}",
        context.format_amount(context.ledger.balance)
    ));
    Ok(())
}
