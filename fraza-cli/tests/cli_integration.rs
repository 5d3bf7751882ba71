//! End-to-end tests for the fraza binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fraza() -> Command {
    Command::cargo_bin("fraza").expect("binary builds")
}

#[test]
fn segment_splits_sentences_with_the_bundled_list() {
    let dir = TempDir::new().unwrap();
    let article = dir.path().join("article.txt");
    fs::write(&article, "Автор: А. Б. Иванов. Текст далее.").unwrap();

    fraza()
        .args(["segment", "--input"])
        .arg(&article)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Автор: А. Б. Иванов.\nТекст далее.\n",
        ));
}

#[test]
fn segment_accepts_a_custom_abbreviation_file() {
    let dir = TempDir::new().unwrap();
    let article = dir.path().join("article.txt");
    fs::write(&article, "Подробнее см. раздел выше. Новая мысль здесь.").unwrap();
    let abbreviations = dir.path().join("abbr.txt");
    fs::write(&abbreviations, "см.\n").unwrap();

    fraza()
        .args(["segment", "--input"])
        .arg(&article)
        .arg("--abbreviations")
        .arg(&abbreviations)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Подробнее см. раздел выше.\nНовая мысль здесь.\n",
        ));
}

#[test]
fn segment_aborts_when_the_abbreviation_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let article = dir.path().join("article.txt");
    fs::write(&article, "Текст статьи.").unwrap();

    fraza()
        .args(["segment", "--input"])
        .arg(&article)
        .args(["--abbreviations", "/no/such/abbreviations.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load abbreviations"));
}

#[test]
fn segment_fails_when_nothing_matches() {
    let dir = TempDir::new().unwrap();
    let pattern = dir.path().join("*.missing").display().to_string();

    fraza()
        .args(["segment", "--input", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input files matched"));
}

#[test]
fn chunks_merges_short_paragraphs() {
    let dir = TempDir::new().unwrap();
    let article = dir.path().join("article.txt");
    fs::write(
        &article,
        "Первый абзац достаточно длинный.\n\nОй.\n\nВторой абзац тоже вполне длинный.\n",
    )
    .unwrap();

    fraza()
        .args(["chunks", "--min-size", "10", "--input"])
        .arg(&article)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Первый абзац достаточно длинный. Ой.\nВторой абзац тоже вполне длинный.\n",
        ));
}

#[test]
fn json_output_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let article = dir.path().join("article.txt");
    fs::write(&article, "Первое предложение. Второе предложение.").unwrap();

    let output = fraza()
        .args(["segment", "--format", "json", "--input"])
        .arg(&article)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let documents = parsed.as_array().unwrap();
    assert_eq!(documents.len(), 1);
    let items = documents[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["text"], "Первое предложение.");
    assert_eq!(items[1]["index"], 1);
}
