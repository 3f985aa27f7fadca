//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BANK: &str = "../../question-banks/logical-reasoning.toml";

const LONG_ANSWER: &str = "I think the plan is good. We can see it work in the town where we \
    live. The kids play in the park each day and the shops are full. People walk to work and \
    ride bikes. It is a calm and safe place. I like it a lot and I hope it stays this way for a \
    long time to come for all of us.";

fn quizgate() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizgate").unwrap()
}

#[test]
fn help_output() {
    quizgate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deterministic quiz assignment and answer scoring",
        ));
}

#[test]
fn version_output() {
    quizgate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizgate"));
}

#[test]
fn assign_picks_reference_question() {
    quizgate()
        .args(["assign", "--name", "alice", "--email", "alice@example.com"])
        .args(["--questions", BANK])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice_alice@example.com"))
        .stdout(predicate::str::contains("Seed:     19723113"))
        .stdout(predicate::str::contains("#6 of 10 (mersenne)"))
        .stdout(predicate::str::contains("two ropes"));
}

#[test]
fn assign_is_stable_across_runs() {
    let run = || {
        let output = quizgate()
            .args(["assign", "--name", "Ada Lovelace", "--email", "ada@example.org"])
            .args(["--questions", BANK, "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    let first = run();
    assert_eq!(first, run());

    let json: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(json["student_id"], "Ada Lovelace_ada@example.org");
    assert_eq!(json["question_index"], 2);
}

#[test]
fn assign_with_modulo_algorithm() {
    quizgate()
        .args(["assign", "--name", "alice", "--email", "alice@example.com"])
        .args(["--questions", BANK, "--algorithm", "modulo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#3 of 10 (modulo)"))
        .stdout(predicate::str::contains("Five machines"));
}

#[test]
fn assign_unknown_algorithm() {
    quizgate()
        .args(["assign", "--name", "a", "--email", "b"])
        .args(["--questions", BANK, "--algorithm", "sha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown assignment algorithm"));
}

#[test]
fn unknown_format_is_rejected() {
    quizgate()
        .args(["assign", "--name", "a", "--email", "b"])
        .args(["--questions", BANK, "--format", "yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yml'"));

    quizgate()
        .args(["score", "--text", "short", "--format", "yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yml'"));
}

#[test]
fn assign_missing_bank() {
    quizgate()
        .args(["assign", "--name", "a", "--email", "b"])
        .args(["--questions", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn score_short_text() {
    quizgate()
        .args(["score", "--text", "short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0 / 10"))
        .stdout(predicate::str::contains("too short"));
}

#[test]
fn score_long_answer_as_json() {
    let output = quizgate()
        .args(["score", "--format", "json", "--text", LONG_ANSWER])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"], 9.0);
    assert_eq!(json["band"], "good");
    assert_eq!(json["signals"]["word_count"], 66);
    assert_eq!(json["signals"]["sentence_count"], 6);
}

#[test]
fn score_from_stdin() {
    quizgate()
        .arg("score")
        .write_stdin(LONG_ANSWER)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 9 / 10 (good)"))
        .stdout(predicate::str::contains("Good response"));
}

#[test]
fn score_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("answer.txt");
    std::fs::write(
        &path,
        "The cat sat on the mat and looked at the dog who sat by the door all day long",
    )
    .unwrap();

    quizgate()
        .args(["score", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2 / 10 (very poor)"));
}

#[test]
fn validate_bank() {
    quizgate()
        .args(["validate", "--questions", BANK])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logical reasoning (10 questions)"))
        .stdout(predicate::str::contains("Question bank valid"));
}

#[test]
fn validate_text_bank() {
    quizgate()
        .args(["validate", "--questions", "../../question-banks/warm-up.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warm-up (3 questions)"));
}

#[test]
fn validate_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.toml");
    std::fs::write(&path, r#"questions = ["Same?", "Same?"]"#).unwrap();

    quizgate()
        .args(["validate", "--questions"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[#2] WARNING: duplicate of question #1"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_empty_bank_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "questions = []\n").unwrap();

    quizgate()
        .args(["validate", "--questions"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no questions"));
}

#[test]
fn serve_refuses_empty_bank() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "# nothing here\n").unwrap();

    quizgate()
        .args(["serve", "--questions"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no questions"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizgate()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizgate.toml"))
        .stdout(predicate::str::contains("Created questions.toml"));

    assert!(dir.path().join("quizgate.toml").exists());
    assert!(dir.path().join("questions.toml").exists());

    // the starter files are usable as-is
    quizgate()
        .current_dir(dir.path())
        .args(["assign", "--name", "alice", "--email", "alice@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#6 of 10"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizgate()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizgate()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
