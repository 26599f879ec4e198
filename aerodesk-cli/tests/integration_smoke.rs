//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn aerodesk(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aerodesk").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("AERODESK_API_TOKEN")
        .env_remove("AERODESK_BIND")
        .env_remove("AERODESK_MAX_CONNECTIONS");
    cmd
}

// === Catalog Command Tests ===

#[test]
fn test_catalog_lists_entities() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("passenger"))
        .stdout(predicate::str::contains("maintenance_record"));
}

#[test]
fn test_catalog_describes_entity() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args(["catalog", "passengers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passportnumber"))
        .stdout(predicate::str::contains("countrycode"))
        .stdout(predicate::str::contains("booking.passengerid"));
}

#[test]
fn test_catalog_prints_ddl() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args(["catalog", "flight", "--ddl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS flight"))
        .stdout(predicate::str::contains("ON DELETE RESTRICT"));
}

#[test]
fn test_catalog_unknown_entity_fails() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args(["catalog", "starship"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("starship"));
}

// === Classify Command Tests ===

#[test]
fn test_classify_foreign_key() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args([
            "classify",
            "passenger",
            "insert or update on table \"passenger\" violates foreign key constraint \"passenger_countrycode_fkey\"",
            "--code",
            "23503",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"foreign_key\""))
        .stdout(predicate::str::contains("\"column\": \"countrycode\""));
}

#[test]
fn test_classify_delete_names_dependent() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args([
            "classify",
            "airline",
            "Cannot delete or update a parent row: a foreign key constraint fails (`aviation`.`flight`, CONSTRAINT `flight_ibfk_1` FOREIGN KEY (`airlineid`) REFERENCES `airline` (`airlineid`))",
            "--op",
            "delete",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": \"flight\""));
}

#[test]
fn test_classify_help() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args(["classify", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Raw error text"));
}

// === Config Command Tests ===

#[test]
fn test_config_path_under_home() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".aerodesk"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_masks_token() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args(["config", "show"])
        .env("AERODESK_API_TOKEN", "hunter2")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_token"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_config_show_reads_file() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".aerodesk");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "bind = \"127.0.0.1:4040\"\n").unwrap();

    aerodesk(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:4040"));
}

// === Serve Command Tests ===

#[test]
fn test_serve_without_database_url_fails() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_help() {
    let home = tempfile::tempdir().unwrap();
    aerodesk(&home)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bootstrap-schema"));
}
