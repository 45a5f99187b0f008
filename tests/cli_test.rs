use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_default_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("total price: 55.0"))
        .stdout(predicate::str::contains("Order has been paid in debit"));

    Ok(())
}

#[test]
fn test_cli_credit_without_auth() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args(["--method", "credit", "--skip-verify"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Order has been paid in credit"));

    Ok(())
}

#[test]
fn test_cli_skip_verify_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("--skip-verify");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Payment not authorized"));

    Ok(())
}

#[test]
fn test_cli_custom_items_json_receipt() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "--item",
        "stapler:2:12.5",
        "--method",
        "paypal",
        "--auth",
        "sms",
        "--json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("total price: 25.0"))
        .stdout(predicate::str::contains("\"method\": \"paypal\""))
        .stdout(predicate::str::contains("\"total\": \"25.0\""));

    Ok(())
}
