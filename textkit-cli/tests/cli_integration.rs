//! Integration tests for the textkit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn numbered_lines(n: usize) -> String {
    (1..=n).map(|i| format!("第{i}行\n")).collect()
}

fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("partition"));
}

#[test]
fn test_count_lines() {
    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("count").arg(fixture_path("chinese-sample.txt"));

    cmd.assert().success().stdout("3\n");
}

#[test]
fn test_count_missing_file() {
    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("count").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent.txt"));
}

#[test]
fn test_split_into_equal_chunks() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("corpus.txt");
    fs::write(&input, numbered_lines(100)).unwrap();

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("split").arg(&input).arg("4");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 files"));

    for i in 1..=4 {
        let chunk = temp_dir.path().join(format!("corpus_{i}.txt"));
        assert_eq!(line_count(&chunk), 25);
    }
    assert!(!temp_dir.path().join("corpus_5.txt").exists());
}

#[test]
fn test_split_keeps_remainder() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("corpus.txt");
    fs::write(&input, numbered_lines(103)).unwrap();

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("split").arg(&input).arg("4").arg("--keep-remainder");
    cmd.assert().success();

    let tail = temp_dir.path().join("corpus_5.txt");
    assert_eq!(fs::read_to_string(tail).unwrap(), "第101行\n第102行\n第103行\n");
}

#[test]
fn test_split_by_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("corpus.txt");
    fs::write(&input, numbered_lines(25)).unwrap();

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("split")
        .arg(&input)
        .arg("--method")
        .arg("line-num")
        .arg("--lines")
        .arg("10");
    cmd.assert().success();

    assert_eq!(line_count(&temp_dir.path().join("corpusaa")), 10);
    assert_eq!(line_count(&temp_dir.path().join("corpusab")), 10);
    assert_eq!(line_count(&temp_dir.path().join("corpusac")), 5);
}

#[test]
fn test_split_rejects_bad_chunk_count() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("corpus.txt");
    fs::write(&input, numbered_lines(5)).unwrap();

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("split").arg(&input).arg("zero");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("chunk count"));
}

#[test]
fn test_split_shorthand_binary() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("corpus.txt");
    fs::write(&input, numbered_lines(9)).unwrap();

    let mut cmd = Command::cargo_bin("textkit-split").unwrap();
    cmd.arg(&input).arg("3");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 files"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("corpus_3.txt")).unwrap(),
        "第7行\n第8行\n第9行\n"
    );
}

#[test]
fn test_merge_directory() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("parts");
    fs::create_dir_all(src.join("deeper")).unwrap();
    fs::write(src.join("a.txt"), "甲\n").unwrap();
    fs::write(src.join("b.txt"), "乙").unwrap();
    fs::write(src.join("deeper/c.txt"), "丙\n").unwrap();
    let output = temp_dir.path().join("merged.txt");

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("merge").arg(&src).arg("-o").arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 files"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "甲\n乙\n");

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("merge").arg(&src).arg("-o").arg(&output).arg("--recursive");
    cmd.assert().success();
    assert_eq!(fs::read_to_string(&output).unwrap(), "甲\n乙\n丙\n");
}

#[test]
fn test_cut_long_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("long.txt");
    let output = temp_dir.path().join("cut.txt");
    fs::write(&input, "一二三四五六七八九十\n").unwrap();

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("cut")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--max")
        .arg("4")
        .arg("--min")
        .arg("2");
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "一二三四\n五六七八\n九十\n"
    );
}

#[test]
fn test_cut_requires_max_length() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("cut.txt");

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("cut")
        .arg(fixture_path("chinese-sample.txt"))
        .arg("-o")
        .arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_cut_max_length_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("textkit.toml");
    fs::write(&config, "[paragraph]\nmax_length = 3\nmin_length = 1\n").unwrap();
    let input = temp_dir.path().join("long.txt");
    fs::write(&input, "春夏秋冬\n").unwrap();
    let output = temp_dir.path().join("cut.txt");

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("cut")
        .arg(&input)
        .arg("-o")
        .arg(&output);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "春夏秋\n冬\n");
}

#[test]
fn test_extract_sentences() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sentences.txt");

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("sentences")
        .arg(fixture_path("chinese-sample.txt"))
        .arg("-o")
        .arg(&output);
    cmd.assert().success();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.matches("今天天气很好").count(), 1);
    assert!(content.contains("我们去公园散步吧"));
}

#[test]
fn test_prep_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("raw.txt");
    fs::write(&input, "Ｈｅｌｌｏ， World 2024！\n").unwrap();

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("prep").arg(&input).arg("--keep-traditional");

    cmd.assert().success().stdout("helloworldnum\n");
}

#[test]
fn test_prep_glob_without_matches() {
    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("prep").arg("/nonexistent/dir/*.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no files found"));
}

#[test]
fn test_partition_with_seed() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("corpus.txt");
    fs::write(&input, numbered_lines(50)).unwrap();
    let out_dir = temp_dir.path().join("sets");

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("partition")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--seed")
        .arg("42");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("train: 36, test: 10, dev: 4"));

    let train = fs::read_to_string(out_dir.join("train.txt")).unwrap();
    let test = fs::read_to_string(out_dir.join("test.txt")).unwrap();
    let dev = fs::read_to_string(out_dir.join("dev.txt")).unwrap();
    let mut all: Vec<&str> = train.lines().chain(test.lines()).chain(dev.lines()).collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 50);
}

#[test]
fn test_partition_rejects_bad_fraction() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("corpus.txt");
    fs::write(&input, numbered_lines(10)).unwrap();

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("partition")
        .arg(&input)
        .arg("--out-dir")
        .arg(temp_dir.path())
        .arg("--test-size")
        .arg("1.5");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("test_size"));
}

#[test]
fn test_strict_rejects_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.txt");
    fs::write(&input, b"ok\n\xff\xfe\n").unwrap();
    let output = temp_dir.path().join("sentences.txt");

    let mut cmd = Command::cargo_bin("textkit").unwrap();
    cmd.arg("--strict")
        .arg("sentences")
        .arg(&input)
        .arg("-o")
        .arg(&output);
    cmd.assert().failure();
}
