use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GOOD_PAGE: &str = "\
---
title: About
description: About this site
slug: about
path: /about
---
# About

Some *emphasised* text.
";

const BROKEN_PAGE: &str = "\
---
title: Broken
description: Missing slug and path
---
content
";

fn quill() -> Command {
    Command::cargo_bin("quill").expect("binary builds")
}

#[test]
fn build_writes_page_under_out_directory() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = dir.path().join("about.md");
    std::fs::write(&input, GOOD_PAGE).unwrap();

    quill()
        .arg("build")
        .arg(&input)
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 page(s) built"));

    let html = std::fs::read_to_string(out.path().join("about").join("index.html")).unwrap();
    assert!(html.contains("<title>About</title>"));
    assert!(html.contains("<em>"));
}

#[test]
fn build_is_idempotent_across_runs() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = dir.path().join("about.md");
    std::fs::write(&input, GOOD_PAGE).unwrap();

    quill()
        .arg("build")
        .arg(&input)
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 written"));

    quill()
        .arg("build")
        .arg(&input)
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 unchanged"));
}

#[test]
fn broken_page_does_not_stop_the_rest_of_the_directory() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(dir.path().join("about.md"), GOOD_PAGE).unwrap();
    std::fs::write(dir.path().join("broken.md"), BROKEN_PAGE).unwrap();

    quill()
        .arg("build")
        .arg(dir.path())
        .arg("--out")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("slug"));

    // The good page was still written.
    assert!(out.path().join("about").join("index.html").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = dir.path().join("about.md");
    std::fs::write(&input, GOOD_PAGE).unwrap();

    quill()
        .arg("build")
        .arg(&input)
        .arg("--out")
        .arg(out.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run]"));

    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn check_validates_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("about.md");
    std::fs::write(&input, GOOD_PAGE).unwrap();

    quill()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("/about"));
}

#[test]
fn check_rejects_missing_front_matter_fields() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.md");
    std::fs::write(&input, BROKEN_PAGE).unwrap();

    quill()
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("slug"));
}

#[test]
fn non_markdown_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("about.txt");
    std::fs::write(&input, GOOD_PAGE).unwrap();

    quill()
        .arg("build")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".md"));
}
