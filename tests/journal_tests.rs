//! Integration tests for analyze, history, clear and activities

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_keyword_journal, jielewe_cmd};

#[test]
fn test_analyze_positive_entry() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("I had an amazing day and it was so much fun")
        .assert()
        .success()
        .stdout(predicate::str::contains("POSITIVE (70% sure)"))
        .stdout(predicate::str::contains("Dance Party"));

    // Not saved without --save
    assert!(!temp.path().join(".jielewe/entries.json").exists());
}

#[test]
fn test_analyze_negative_entry_suggests_calming_activities() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("I was worried and scared about my test")
        .assert()
        .success()
        .stdout(predicate::str::contains("😢  NEGATIVE (70% sure)"))
        .stdout(predicate::str::contains("Deep Breathing"));
}

#[test]
fn test_analyze_neutral_entry() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("We went to the library after lunch")
        .assert()
        .success()
        .stdout(predicate::str::contains("NEUTRAL (60% sure)"))
        .stdout(predicate::str::contains("Nature Adventure"));
}

#[test]
fn test_analyze_too_short_fails() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("sad")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn test_analyze_too_long_fails() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("happy ".repeat(100))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("too long"));
}

#[test]
fn test_unreachable_model_falls_back_to_keywords() {
    let temp = TempDir::new().unwrap();
    jielewe_cmd().arg("init").arg(temp.path()).assert().success();

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("endpoint")
        .arg("http://127.0.0.1:9/models")
        .assert()
        .success();

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("I feel lonely and upset today")
        .assert()
        .success()
        .stdout(predicate::str::contains("NEGATIVE (70% sure)"));
}

#[test]
fn test_save_then_history() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("We played a great game of tag")
        .arg("--save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved!"));

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("My ice cream fell and I was sad")
        .arg("--save")
        .assert()
        .success();

    let output = jielewe_cmd()
        .current_dir(temp.path())
        .arg("history")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let newest = stdout.find("My ice cream fell").unwrap();
    let oldest = stdout.find("great game of tag").unwrap();
    assert!(newest < oldest, "history should be newest first");
    assert!(stdout.contains("NEGATIVE"));
    assert!(stdout.contains("POSITIVE"));
}

#[test]
fn test_history_limit() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    for text in ["First entry of the week", "Second entry of the week"] {
        jielewe_cmd()
            .current_dir(temp.path())
            .arg("analyze")
            .arg(text)
            .arg("--save")
            .assert()
            .success();
    }

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("history")
        .arg("-n")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Second entry"))
        .stdout(predicate::str::contains("First entry").not());
}

#[test]
fn test_history_empty() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_corrupt_history_is_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());
    fs::write(temp.path().join(".jielewe/entries.json"), "not json at all").unwrap();

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_clear() {
    let temp = TempDir::new().unwrap();
    init_keyword_journal(temp.path());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .arg("Something worth remembering")
        .arg("--save")
        .assert()
        .success();

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));

    assert!(!temp.path().join(".jielewe/entries.json").exists());

    jielewe_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_activities() {
    jielewe_cmd()
        .arg("activities")
        .arg("positive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gratitude List"))
        .stdout(predicate::str::contains("Super Easy!"));
}

#[test]
fn test_activities_unknown_emotion_shows_neutral_set() {
    jielewe_cmd()
        .arg("activities")
        .arg("grumpy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Try Something New"))
        .stdout(predicate::str::contains("Nature Adventure"));
}

#[test]
fn test_activities_label_is_case_insensitive() {
    jielewe_cmd()
        .arg("activities")
        .arg("NeGaTiVe")
        .assert()
        .success()
        .stdout(predicate::str::contains("Try Something New").not());
}
