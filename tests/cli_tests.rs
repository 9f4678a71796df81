use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn demo_binary_prints_both_reports() {
    let mut cmd = Command::cargo_bin("budget_report_cli").unwrap();
    cmd.assert()
        .success()
        .stdout(contains("Percentage spent by category"))
        .stdout(contains("Total: "));
}
