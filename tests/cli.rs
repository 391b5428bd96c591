//! End-to-end tests driving the resplit binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn resplit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resplit").unwrap();
    cmd.env("RESPLIT_DATA_DIR", data_dir.path());
    cmd
}

fn write_items(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("items.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

const RECEIPT: &str = "\
name,price,owner
Burger,12.99,me
Fries,4.99,p1
Soda,2.49,shared
";

#[test]
fn split_prints_settlement() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir, RECEIPT);

    resplit(&dir)
        .args(["split"])
        .arg(&items)
        .args(["--participants", "1", "--tax", "2.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Burger"))
        .stdout(predicate::str::contains("$15.63"))
        .stdout(predicate::str::contains("$6.84"))
        .stdout(predicate::str::contains("Grand total: $22.47"));
}

#[test]
fn split_writes_csv_export() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir, RECEIPT);
    let out = dir.path().join("summary.csv");

    resplit(&dir)
        .args(["split"])
        .arg(&items)
        .args(["--participants", "1", "--tax", "2.00"])
        .arg("--export-csv")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary exported to:"));

    let exported = std::fs::read_to_string(&out).unwrap();
    assert!(exported.starts_with("Item,Price,Assigned To\n"));
    assert!(exported.contains("\"Your Total\",15.63"));
    assert!(exported.contains("\"Friend 1's Total\",6.84"));
}

#[test]
fn split_writes_json_export() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir, RECEIPT);
    let out = dir.path().join("settlement.json");

    resplit(&dir)
        .args(["split"])
        .arg(&items)
        .args(["--participants", "1"])
        .arg("--export-json")
        .arg(&out)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["parties"][0]["label"], "You");
    assert_eq!(value["grand_total"], "20.47");
}

#[test]
fn split_rejects_out_of_range_owner() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir, "name,price,owner\nFries,4.99,p3\n");

    resplit(&dir)
        .args(["split"])
        .arg(&items)
        .args(["--participants", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn split_rejects_too_many_participants() {
    let dir = TempDir::new().unwrap();
    let items = write_items(&dir, RECEIPT);

    resplit(&dir)
        .args(["split"])
        .arg(&items)
        .args(["--participants", "5"])
        .assert()
        .failure();
}

#[test]
fn template_round_trips_through_split() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.csv");

    resplit(&dir)
        .arg("template")
        .arg(&template)
        .assert()
        .success();

    resplit(&dir)
        .args(["split"])
        .arg(&template)
        .args(["--participants", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grand total:"));
}

#[test]
fn config_updates_persist() {
    let dir = TempDir::new().unwrap();

    resplit(&dir)
        .args(["config", "--currency", "€", "--initials", "AB,CD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    resplit(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:    €"))
        .stdout(predicate::str::contains("AB, CD"));

    // The saved currency also flows into split output
    let items = write_items(&dir, "name,price,owner\nBurger,12.99,me\n");
    resplit(&dir)
        .args(["split"])
        .arg(&items)
        .args(["--participants", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€12.99"));
}
