use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::category_totals;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "report",
        "Show spending totals per category",
        "report",
        cmd_report,
    )]
}

fn cmd_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = category_totals(&context.ledger);
    let overall = context.ledger.total_expenses();

    output::section("Spending by category");
    for entry in &totals {
        let share = if overall > 0.0 {
            entry.total / overall * 100.0
        } else {
            0.0
        };
        cli_io::print_info(format!(
            "{:<15} {:>12} {share:>6.1}%",
            entry.category,
            context.format_amount(entry.total)
        ));
    }
    cli_io::print_info(format!(
        "{:<15} {:>12}",
        "Total",
        context.format_amount(overall)
    ));
    Ok(())
}
