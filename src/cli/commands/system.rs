use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "List commands or show usage for one",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show version and build details", "version", cmd_version),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.command(&name) {
            help::print_command(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let build = build_info::current();
    output::section(format!("Wallet Core {}", build.version));
    cli_io::print_info(format!("  {:<12} {}", "CLI version", build_info::CLI_VERSION));
    cli_io::print_info(format!(
        "  {:<12} v{}",
        "Schema",
        crate::ledger::CURRENT_SCHEMA_VERSION
    ));
    cli_io::print_info(format!(
        "  {:<12} {} ({})",
        "Build hash", build.git_hash, build.git_status
    ));
    cli_io::print_info(format!("  {:<12} {}", "Built at", build.timestamp));
    cli_io::print_info(format!("  {:<12} {}", "Target", build.target));
    cli_io::print_info(format!("  {:<12} {}", "Profile", build.profile));
    cli_io::print_info(format!("  {:<12} {}", "Rustc", build.rustc));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
