pub mod config;
pub mod expense;
pub mod report;
pub mod system;
pub mod wallet;

use crate::cli::registry::CommandRegistry;

/// Registers every command. Registration order is the order `help` lists.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let definitions = wallet::definitions()
        .into_iter()
        .chain(expense::definitions())
        .chain(report::definitions())
        .chain(config::definitions())
        .chain(system::definitions());
    for entry in definitions {
        registry.register(entry);
    }
}
