//! Integration tests for the msgspell command-line tools.
//!
//! These use a plain word list so no Hunspell dictionary is required.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn word_list(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "the\ncount\nis\nhigh\nopen\nfile\nthis\nspelled\n").unwrap();
    path
}

#[test]
fn clean_input_exits_zero() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("msgspell-check").unwrap();
    cmd.arg("-w")
        .arg(word_list(&dir))
        .write_stdin("The vertices count is high.\nOpen file\n");

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn misspelling_is_reported_with_location() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("messages.txt");
    std::fs::write(&input, "Open file\nThis is wrnogly spelled.\n").unwrap();

    let mut cmd = Command::cargo_bin("msgspell-check").unwrap();
    cmd.arg("-w").arg(word_list(&dir)).arg(&input);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(":2: W: wrnogly (no suggestions)"));
}

#[test]
fn json_output_has_one_object_per_string() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("msgspell-check").unwrap();
    cmd.arg("-w")
        .arg(word_list(&dir))
        .arg("--json")
        .write_stdin("Opne file\nOpen file\n");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(r#""source":"-""#))
        .stdout(predicate::str::contains(r#""line":1"#))
        .stdout(predicate::str::contains(r#""word":"Opne""#));
}

#[test]
fn cache_is_created_on_request() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache.json");

    let mut cmd = Command::cargo_bin("msgspell-check").unwrap();
    cmd.arg("-w")
        .arg(word_list(&dir))
        .arg("-c")
        .arg(&cache)
        .arg("--cache-mode")
        .arg("create")
        .write_stdin("Open file\n");
    cmd.assert().success();

    let written = std::fs::read_to_string(&cache).unwrap();
    assert!(written.contains("\"open\""));
    assert!(written.contains("\"Open file\""));
}

#[test]
fn cache_is_not_created_by_default() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache.json");

    let mut cmd = Command::cargo_bin("msgspell-check").unwrap();
    cmd.arg("-w")
        .arg(word_list(&dir))
        .arg("-c")
        .arg(&cache)
        .write_stdin("Open file\n");
    cmd.assert().success();

    assert!(!cache.exists());
}

#[test]
fn corrupt_cache_is_a_setup_error() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache.json");
    std::fs::write(&cache, "{broken").unwrap();

    let mut cmd = Command::cargo_bin("msgspell-check").unwrap();
    cmd.arg("-w")
        .arg(word_list(&dir))
        .arg("-c")
        .arg(&cache)
        .write_stdin("Open file\n");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse cache"));
}

#[test]
fn missing_hunspell_dictionary_is_a_setup_error() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("msgspell-check").unwrap();
    cmd.env("HOME", dir.path())
        .env_remove("MSGSPELL_DICT_PATH")
        .current_dir(dir.path())
        .arg("-l")
        .arg("xx_XX")
        .write_stdin("Open file\n");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("no dictionary for xx_XX"));
}

#[test]
fn tokenize_prints_words() {
    let mut cmd = Command::cargo_bin("msgspell-tokenize").unwrap();
    cmd.write_stdin("CamelCaseWord fullscreen!\n");

    cmd.assert()
        .success()
        .stdout("Camel\nCase\nWord\nfullscreen\n");
}

#[test]
fn tokenize_lines_mode() {
    let mut cmd = Command::cargo_bin("msgspell-tokenize").unwrap();
    cmd.arg("--lines").write_stdin("foo/bar 3D\n\nadd-ons\n");

    cmd.assert().success().stdout("foo\tbar\n\nadd\tons\n");
}
