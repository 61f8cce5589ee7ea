use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn classify_output_right_answers() {
    let mut cmd = Command::cargo_bin("classify").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("1 is a defective number"))
        .stdout(str::contains("6 is a perfect number"))
        .stdout(str::contains("28 is a perfect number"))
        .stdout(str::contains("12 is an abundant number"))
        .stdout(str::contains("7 is a defective number"))
        .stdout(str::contains("0 is not a positive integer"))
        .stdout(str::contains("-5 is not a positive integer"))
        .stdout(str::contains("3.5 is not a positive integer"))
        .stdout(str::contains("x is not a positive integer"))
        .stdout(str::contains("496 is a perfect number"));
}

#[test]
fn classify_keeps_input_order() {
    let mut cmd = Command::cargo_bin("classify").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout(str::contains(
        "1 is a defective number.\n6 is a perfect number.\n28 is a perfect number.",
    ));
}

#[test]
fn classify_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("classify").unwrap();
    cmd.arg("no_such_inputs.txt");

    cmd.assert().failure();
}
