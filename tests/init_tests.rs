//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_keyword_journal, jielewe_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    jielewe_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".jielewe").exists());

    let config_path = temp.path().join(".jielewe/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("backend = \"huggingface\""));
    assert!(content.contains("distilbert"));
}

#[test]
fn test_init_with_keyword_backend() {
    let temp = TempDir::new().unwrap();

    init_keyword_journal(temp.path());

    let content = fs::read_to_string(temp.path().join(".jielewe/config.toml")).unwrap();
    assert!(content.contains("backend = \"keyword\""));
}

#[test]
fn test_init_invalid_backend_fails() {
    let temp = TempDir::new().unwrap();

    jielewe_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--backend")
        .arg("crystal-ball")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid backends: huggingface, keyword"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_keyword_journal(temp.path());

    jielewe_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_set_and_get_backend() {
    let temp = TempDir::new().unwrap();

    jielewe_cmd().arg("init").arg(temp.path()).assert().success();

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("backend")
        .arg("keyword")
        .assert()
        .success();

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("backend")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend = keyword"))
        .stdout(predicate::str::contains("retries = 0"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("colour")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'colour'"));
}

#[test]
fn test_config_outside_journal_fails() {
    let temp = TempDir::new().unwrap();

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("jielewe init"));
}

#[test]
fn test_root_env_var() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(elsewhere.path())
        .env("JIELEWE_ROOT", temp.path())
        .arg("config")
        .arg("backend")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword"));
}
