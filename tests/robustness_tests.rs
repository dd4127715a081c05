use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

fn session(input: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("till-change"));
    cmd.write_stdin(input);
    cmd
}

#[test]
fn test_unparseable_price_reprompts() {
    session("abc\n5.00\n3.50\n5.00\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The product price is not a valid number",
        ))
        .stdout(predicate::str::contains("Your change is:"));
}

#[test]
fn test_unparseable_payment_reprompts() {
    session("10\nabc\n3.50\n5.00\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The payment amount is not a valid number",
        ))
        .stdout(predicate::str::contains("Your change is:"));
}

#[test]
fn test_free_item_rejected() {
    session("0\n5.00\n3.50\n5.00\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The product is free"));
}

#[test]
fn test_negative_price_rejected() {
    session("-5\n5.00\n3.50\n5.00\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The product price cannot be negative",
        ))
        // No breakdown for the rejected pair; only the corrected one succeeds.
        .stdout(predicate::str::contains("Your change is:"));
}

#[test]
fn test_non_positive_payment_rejected() {
    session("5.00\n0\n3.50\n5.00\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The payment amount must be greater than zero",
        ));
}

#[test]
fn test_insufficient_payment_rejected() {
    session("5.00\n4.99\n3.50\n5.00\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The payment does not cover the product price",
        ));
}

#[test]
fn test_rejections_never_terminate_the_process() {
    // A string of bad pairs followed by one good pair; the loop survives all of
    // them and still exits successfully on the quit token.
    session("abc\n1\n-5\n1\n5\n0\n5\n4\n3.50\n5.00\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your change is:"));
}
