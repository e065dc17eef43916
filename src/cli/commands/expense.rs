use crate::cli::core::{parse_date_arg, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::{parse_amount, Category, ExpenseDraft, Transaction};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "expense",
        "Add, edit, delete, or list expenses",
        "expense <add|edit|delete|list> [args]",
        cmd_expense,
    )]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_ascii_lowercase()).as_deref() {
        Some("add") => add(context, &args[1..]),
        Some("edit") => edit(context, &args[1..]),
        Some("delete") | Some("remove") => delete(context, &args[1..]),
        Some("list") | None => list(context),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown expense action `{other}`. Use add, edit, delete, or list."
        ))),
    }
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() && context.mode() == CliMode::Interactive {
        prompt_draft(context, None)?
    } else {
        draft_from_args(args)?
    };

    let id = context.ledger.add_expense(draft)?;
    context.persist_ledger();

    if let Some(txn) = context.ledger.transaction(id) {
        cli_io::print_success(format!(
            "Expense added: {} ({})",
            txn.title,
            context.format_amount(txn.amount)
        ));
    }
    print_balance_line(context);
    Ok(())
}

fn edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(position) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "Usage: expense edit <position> [title amount category [date]]".to_string(),
        ));
    };
    let id = context.expense_id_at(position)?;

    let rest = &args[1..];
    let draft = if rest.is_empty() && context.mode() == CliMode::Interactive {
        let existing = context.ledger.transaction(id).cloned();
        prompt_draft(context, existing.as_ref())?
    } else {
        draft_from_args(rest)?
    };

    context.ledger.edit_expense(id, draft)?;
    context.persist_ledger();

    if let Some(txn) = context.ledger.transaction(id) {
        cli_io::print_success(format!(
            "Expense updated: {} ({})",
            txn.title,
            context.format_amount(txn.amount)
        ));
    }
    print_balance_line(context);
    Ok(())
}

fn delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(position) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "Usage: expense delete <position>".to_string(),
        ));
    };
    let id = context.expense_id_at(position)?;

    if context.mode() == CliMode::Interactive
        && !cli_io::confirm_action(context.theme(), "Delete this expense?", false)?
    {
        cli_io::print_info("Aborted.");
        return Ok(());
    }

    match context.ledger.delete_expense(id) {
        Some(removed) => {
            context.persist_ledger();
            cli_io::print_success(format!(
                "Deleted `{}` ({} refunded)",
                removed.title,
                context.format_amount(removed.amount)
            ));
            print_balance_line(context);
        }
        None => cli_io::print_info("Nothing to delete."),
    }
    Ok(())
}

fn list(context: &ShellContext) -> CommandResult {
    output::section("Expense history");
    if context.ledger.transactions.is_empty() {
        cli_io::print_info("No expenses added.");
        return Ok(());
    }

    for (index, txn) in context.ledger.transactions.iter().enumerate() {
        let date = txn
            .date
            .map(|date| context.format_date(date))
            .unwrap_or_else(|| "-".to_string());
        cli_io::print_info(format!(
            "{:>3}. {:<24} {:>12}  {:<13} {date}",
            index + 1,
            txn.title,
            context.format_amount(txn.amount),
            txn.category
        ));
    }
    Ok(())
}

fn print_balance_line(context: &ShellContext) {
    cli_io::print_info(format!(
        "Balance is now {}",
        context.format_amount(context.ledger.balance)
    ));
}

/// Positional form: `<title> <amount> <category> [date]`. Missing
/// positions stay empty so the ledger reports them as missing fields, the
/// same way an empty form submission would.
fn draft_from_args(args: &[&str]) -> Result<ExpenseDraft, CommandError> {
    let mut draft = ExpenseDraft::default();
    if let Some(title) = args.first() {
        draft.title = title.to_string();
    }
    if let Some(raw) = args.get(1) {
        draft.amount = Some(parse_amount(raw)?);
    }
    if let Some(raw) = args.get(2) {
        draft.category = Some(parse_category(raw)?);
    }
    if let Some(raw) = args.get(3) {
        draft.date = Some(parse_date_arg(raw)?);
    }
    Ok(draft)
}

fn prompt_draft(
    context: &ShellContext,
    existing: Option<&Transaction>,
) -> Result<ExpenseDraft, CommandError> {
    let title = context.prompt_title(existing.map(|txn| txn.title.as_str()))?;
    let amount = context.prompt_amount("Amount", existing.map(|txn| txn.amount))?;
    let category = context.select_category(existing.map(|txn| txn.category))?;
    let date = context.prompt_date(existing.and_then(|txn| txn.date))?;
    Ok(ExpenseDraft {
        title,
        amount: Some(amount),
        category: Some(category),
        date,
    })
}

fn parse_category(raw: &str) -> Result<Category, CommandError> {
    raw.parse::<Category>().map_err(|err| {
        let known: Vec<&str> = Category::ALL.iter().map(|category| category.name()).collect();
        CommandError::InvalidArguments(format!("{err}. Valid categories: {}", known.join(", ")))
    })
}
