//! # Parley CLI Ask/Teach Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! Exercises `parley teach` and `parley ask` against a temporary knowledge
//! base.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

const SEEDED: &str = r#"{
  "questions": [
    { "question": "What is your name?", "answer": "I'm Parley." },
    { "question": "How are you?", "answer": "Good enough." }
  ]
}"#;

#[test]
fn test_ask_fuzzy_match() {
    let env = TestEnv::new();
    env.seed_knowledge(SEEDED);
    env.cmd()
        .args(["ask", "what", "is", "your", "name"])
        .assert()
        .success()
        .stdout("I'm Parley.\n");
}

#[test]
fn test_ask_unknown_question_fails() {
    let env = TestEnv::new();
    env.seed_knowledge(SEEDED);
    env.cmd()
        .args(["ask", "tell me a joke"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No known answer for 'tell me a joke'."));
}

#[test]
fn test_ask_with_empty_knowledge_base_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No known answer"));
    assert!(!env.knowledge_path().exists());
}

#[test]
fn test_ask_lists_candidates_with_scores() {
    let env = TestEnv::new();
    env.seed_knowledge(SEEDED);
    env.cmd()
        .args(["ask", "--candidates", "5", "How are you?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.00  How are you?  =>  Good enough."));
}

#[test]
fn test_ask_rejects_zero_candidates() {
    let env = TestEnv::new();
    env.seed_knowledge(SEEDED);
    env.cmd()
        .args(["ask", "--candidates", "0", "How are you?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No known answer").not());
}

#[test]
fn test_ask_threshold_flag() {
    let env = TestEnv::new();
    env.seed_knowledge(SEEDED);
    env.cmd()
        .args(["ask", "--threshold", "0.2", "your name"])
        .assert()
        .success()
        .stdout("I'm Parley.\n");
}

#[test]
fn test_ask_malformed_knowledge_base() {
    let env = TestEnv::new();
    env.seed_knowledge("{not json");
    env.cmd()
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON"));
}

#[test]
fn test_teach_then_ask() {
    let env = TestEnv::new();
    env.cmd()
        .args(["teach", "-q", "What is Rust?", "-a", "A systems language."])
        .assert()
        .success()
        .stdout("Learned a new answer for 'What is Rust?'.\n");

    env.cmd()
        .args(["ask", "what is rust"])
        .assert()
        .success()
        .stdout("A systems language.\n");

    let saved = fs::read_to_string(env.knowledge_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["questions"][0]["question"], "What is Rust?");
}

#[test]
fn test_teach_replaces_existing_answer() {
    let env = TestEnv::new();
    env.seed_knowledge(SEEDED);
    env.cmd()
        .args(["teach", "-q", "How are you?", "-a", "Great!"])
        .assert()
        .success()
        .stdout("Updated the answer for 'How are you?'.\n");

    env.cmd()
        .args(["ask", "how are you"])
        .assert()
        .success()
        .stdout("Great!\n");
}

#[test]
fn test_teach_rejects_empty_answer() {
    let env = TestEnv::new();
    env.cmd()
        .args(["teach", "-q", "ping", "-a", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}
