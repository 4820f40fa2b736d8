//! # Parley CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! Drives `parley chat` through stdin in each mode and checks the replies,
//! the learned knowledge base, and the recorded history.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_chat_learns_unknown_answer() {
    let env = TestEnv::new();
    env.cmd()
        .arg("chat")
        .write_stdin("what is rust\nA language.\nWhat is Rust?\n-exit-\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bot: Sorry, I don't know what to say. Can you teach me?")
                .and(predicate::str::contains("Bot: Thanks, I'll remember that."))
                .and(predicate::str::contains("Bot: A language."))
                .and(predicate::str::ends_with("Bot: Goodbye!\n")),
        );

    env.cmd()
        .args(["ask", "what is rust"])
        .assert()
        .success()
        .stdout("A language.\n");
}

#[test]
fn test_chat_skip_does_not_learn() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chat", "--no-history"])
        .write_stdin("what is rust\nskip\n-exit-\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bot: Okay, I'll skip."));
    assert!(!env.knowledge_path().exists());
    assert!(!env.history_path().exists());
}

#[test]
fn test_chat_overwrite_replaces_last_answer() {
    let env = TestEnv::new();
    env.seed_knowledge(r#"{"questions": [{"question": "how are you", "answer": "Meh."}]}"#);
    env.cmd()
        .arg("chat")
        .write_stdin("how are you\n-overwrite-\nGreat!\nhow are you\n-exit-\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bot: Meh.").and(predicate::str::contains("Bot: Great!")));
}

#[test]
fn test_chat_conversation_mode_matches_whole_session() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chat", "--conversation", "--no-history"])
        .write_stdin("hello there\nHi!\nwhat is my name\nYou have not told me.\n-exit-\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bot: Thanks, I'll remember that.").count(2));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(env.knowledge_path()).unwrap()).unwrap();
    assert_eq!(saved["questions"][0]["question"], "hello there");
    assert_eq!(saved["questions"][1]["question"], "hello there\nwhat is my name");

    env.cmd()
        .args(["chat", "--conversation", "--no-history"])
        .write_stdin("hello there\nwhat is my name\n-exit-\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bot: Hi!")
                .and(predicate::str::contains("Bot: You have not told me."))
                .and(predicate::str::contains("Can you teach me?").not()),
        );
}

#[test]
fn test_chat_exit_command_ignores_case() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chat", "--mode", "canned", "--no-history"])
        .write_stdin("-EXIT-\nhello\n")
        .assert()
        .success()
        .stdout(
            predicate::str::ends_with("Bot: Goodbye!\n")
                .and(predicate::str::contains("Hello there!").not()),
        );
}

#[test]
fn test_chat_overwrite_after_close_match() {
    let env = TestEnv::new();
    env.seed_knowledge(r#"{"questions": [{"question": "favourite colour", "answer": "Blue"}]}"#);
    env.cmd()
        .args(["chat", "--no-history"])
        .write_stdin("favourite colour?\n-overwrite-\nGreen\n-exit-\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bot: Blue"));

    env.cmd()
        .args(["ask", "favourite colour"])
        .assert()
        .success()
        .stdout("Green\n");
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(env.knowledge_path()).unwrap()).unwrap();
    assert_eq!(saved["questions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_chat_ends_on_end_of_input() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chat", "--mode", "canned"])
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bot: Hello there!"));
}

#[test]
fn test_chat_canned_mode() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chat", "--mode", "canned", "--no-history"])
        .write_stdin("How are you\nwhat's up\n-exit-\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bot: Good enough")
                .and(predicate::str::contains("Bot: I'm not sure how to respond to that.")),
        );
}

#[test]
fn test_chat_intent_mode() {
    let env = TestEnv::new();
    fs::write(
        env.intents_path(),
        r#"{"intents": [
            {"tag": "greeting", "patterns": ["hello", "hi there"], "responses": ["Hey!"]},
            {"tag": "goodbye", "patterns": ["bye", "see you later"], "responses": ["Bye now."]}
        ]}"#,
    )
    .unwrap();
    env.cmd()
        .args(["chat", "--mode", "intent"])
        .write_stdin("hello\nsee you later\nquantum chromodynamics\n-exit-\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bot: Hey!")
                .and(predicate::str::contains("Bot: Bye now."))
                .and(predicate::str::contains("Bot: I'm not sure how to respond to that.")),
        );
}

#[test]
fn test_chat_intent_mode_requires_intents_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chat", "--mode", "intent"])
        .write_stdin("hello\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_chat_uses_configured_bot_name_and_commands() {
    let env = TestEnv::with_config("[session]\nbot_name = \"Ada\"\nexit_command = \"/quit\"\n");
    env.cmd()
        .args(["chat", "--mode", "canned"])
        .write_stdin("hello\n/quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Chat with Ada! Type '/quit' to quit")
                .and(predicate::str::contains("Ada: Hello there!"))
                .and(predicate::str::ends_with("Ada: Goodbye!\n")),
        );
}
