use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn smartspend(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smartspend"));
    cmd.env("SMARTSPEND_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn added_id(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: ").map(str::to_string))
        .expect("id line in add output")
}

#[test]
fn add_then_list_shows_expense() {
    let dir = TempDir::new().unwrap();

    smartspend(&dir)
        .args(["add", "1250.50", "--category", "food", "--date", "2024-03-05"])
        .args(["--notes", "Team lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: ₹1,250.50"))
        .stdout(predicate::str::contains("Food & Dining"));

    smartspend(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team lunch"))
        .stdout(predicate::str::contains("2024-03-05"))
        .stdout(predicate::str::contains("1 expense(s), total ₹1,250.50"));

    let stored = std::fs::read_to_string(dir.path().join("data/smartspend-expenses.json")).unwrap();
    assert!(stored.contains("\"amount\":1250.5"));
}

#[test]
fn list_filters_by_category_and_month() {
    let dir = TempDir::new().unwrap();
    for (amount, category, date) in [
        ("100", "Travel", "2024-01-10"),
        ("200", "Food", "2024-01-11"),
        ("300", "Travel", "2024-02-01"),
    ] {
        smartspend(&dir)
            .args(["add", amount, "-c", category, "-d", date])
            .assert()
            .success();
    }

    smartspend(&dir)
        .args(["list", "--category", "Travel", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 expense(s), total ₹100"));

    smartspend(&dir)
        .args(["list", "--month", "All", "--category", "travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 expense(s), total ₹400"));

    smartspend(&dir)
        .args(["months"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02  Feb 2024\n2024-01  Jan 2024"));
}

#[test]
fn zero_and_negative_amounts_are_rejected() {
    let dir = TempDir::new().unwrap();

    smartspend(&dir)
        .args(["add", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));

    smartspend(&dir)
        .args(["add", "-50", "--category", "Bills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    smartspend(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    smartspend(&dir)
        .args(["add", "10", "--category", "Gadgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gadgets"));
}

#[test]
fn delete_removes_expense() {
    let dir = TempDir::new().unwrap();

    let output = smartspend(&dir)
        .args(["add", "75", "--category", "Health", "--date", "2024-05-01"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = added_id(&output.stdout);

    smartspend(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted expense: {}", id)));

    smartspend(&dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));

    smartspend(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn budget_set_and_show() {
    let dir = TempDir::new().unwrap();

    smartspend(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget:            ₹50,000"));

    smartspend(&dir)
        .args(["budget", "set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget set to ₹1,000"));

    smartspend(&dir)
        .args(["budget", "set", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget must be a positive amount"));

    let stored = std::fs::read_to_string(dir.path().join("data/smartspend-budget.json")).unwrap();
    assert_eq!(stored, "1000");
}

#[test]
fn summary_reflects_current_month() {
    let dir = TempDir::new().unwrap();

    smartspend(&dir)
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Category:      N/A"))
        .stdout(predicate::str::contains("Transactions:      0"));

    smartspend(&dir).args(["budget", "set", "500"]).assert().success();
    smartspend(&dir)
        .args(["add", "700", "--category", "Travel"])
        .assert()
        .success();

    smartspend(&dir)
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Expense:   ₹700"))
        .stdout(predicate::str::contains("-₹200"))
        .stdout(predicate::str::contains("Top Category:      Travel (₹700)"))
        .stdout(predicate::str::contains("Transactions:      1"));

    smartspend(&dir)
        .args(["analytics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category Breakdown (This Month)"))
        .stdout(predicate::str::contains("Travel"));
}

#[test]
fn corrupt_data_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("smartspend-expenses.json"), "{not json").unwrap();
    std::fs::write(data.join("smartspend-budget.json"), "\"abc\"").unwrap();

    smartspend(&dir)
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹50,000"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    smartspend(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: ₹"));

    let settings = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&settings).unwrap();
    assert_eq!(parsed["schema_version"], 1);
    assert_eq!(parsed["default_budget"], 50000);
}
