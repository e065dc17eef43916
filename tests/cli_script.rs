mod common;

use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;

fn wallet_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wallet_core_cli").unwrap();
    cmd.env("WALLET_CORE_CLI_SCRIPT", "1")
        .env("WALLET_CORE_HOME", home);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin("income 1000\nexpense add Lunch 200 food\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Income added"))
        .stdout(contains("Expense added"))
        .stdout(contains("5800.00"));

    let json = std::fs::read_to_string(home.join("wallet.json")).unwrap();
    assert!(json.contains("\"Lunch\""));
}

#[test]
fn quoted_titles_survive_tokenizing() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin("expense add \"Movie night\" 250 entertainment\nexit\n")
        .assert()
        .success()
        .stdout(contains("Movie night"));

    let json = std::fs::read_to_string(home.join("wallet.json")).unwrap();
    assert!(json.contains("\"Movie night\""));
}

#[test]
fn overdraft_is_reported_and_the_wallet_keeps_its_balance() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin("expense add Flight 10000 travel\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Insufficient balance"))
        .stdout(contains("5000.00"));
}

#[test]
fn missing_fields_warn_without_charging_the_wallet() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin("expense add Lunch\nbalance\nexit\n")
        .assert()
        .success()
        .stdout(contains("All fields are required"))
        .stdout(contains("5000.00"));
}

#[test]
fn edit_and_delete_use_list_positions() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin(
            "income 1000\n\
             expense add Lunch 200 food\n\
             expense edit 1 Lunch 150 food\n\
             expense delete 1\n\
             balance\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("Expense updated"))
        .stdout(contains("Deleted `Lunch`"))
        .stdout(contains("6000.00"));
}

#[test]
fn state_persists_across_invocations() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin("income 1000\nexit\n")
        .assert()
        .success();

    wallet_cmd(&home)
        .write_stdin("balance\nexit\n")
        .assert()
        .success()
        .stdout(contains("6000.00"));
}

#[test]
fn report_lists_every_category() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin("expense add Lunch 100 food\nreport\nexit\n")
        .assert()
        .success()
        .stdout(contains("Spending by category"))
        .stdout(contains("Food"))
        .stdout(contains("Entertainment"))
        .stdout(contains("Health"))
        .stdout(contains("Total"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = common::isolated_home();

    wallet_cmd(&home)
        .write_stdin("blance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command"))
        .stdout(contains("Suggestion: `balance`?"));
}
