//! Behavioral specs for rewriting files.

use crate::prelude::*;

/// > Files are printed to stdout in argument order
#[test]
fn files_print_in_argument_order() {
    let project = Project::empty();
    for i in 0..12 {
        project.file(&format!("f{i:02}.txt"), format!("foo{i}\n"));
    }
    let names: Vec<String> = (0..12).rev().map(|i| format!("f{i:02}.txt")).collect();
    let expected: String = (0..12).rev().map(|i| format!("bar{i}\n")).collect();

    project
        .cmd()
        .args(["-e", "foo", "bar"])
        .args(&names)
        .assert()
        .success()
        .stdout(expected);

    assert_eq!(project.read("f00.txt"), "foo0\n");
}

/// > --in-place rewrites files and prints nothing
#[test]
fn in_place_rewrites_files() {
    let project = Project::empty();
    project.file("a.txt", "color colour\n");
    project.file("nested/b.txt", "no match\n");

    project
        .cmd()
        .args(["-i", "-e", "colou?r", "hue", "a.txt", "nested/b.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(project.read("a.txt"), "hue hue\n");
    assert_eq!(project.read("nested/b.txt"), "no match\n");
}

/// > Large files are rewritten like small ones
#[test]
fn in_place_rewrites_large_files() {
    let project = Project::empty();
    let content = "foo bar\n".repeat(20_000);
    project.file("big.txt", &content);

    project
        .cmd()
        .args(["--in-place", "-e", "foo", "baz", "big.txt"])
        .assert()
        .success();

    assert_eq!(project.read("big.txt"), content.replace("foo", "baz"));
}

/// > A missing file is reported, the others are still processed, exit 1
#[test]
fn missing_file_fails_but_others_run() {
    let project = Project::empty();
    project.file("ok.txt", "foo");

    project
        .cmd()
        .args(["-e", "foo", "bar", "missing.txt", "ok.txt"])
        .assert()
        .code(1)
        .stdout("bar")
        .stderr(predicates::str::contains("missing.txt"));
}

/// > Memoization works across files
#[test]
fn memoize_rewrites_files() {
    let project = Project::empty();
    project.file("a.txt", "x1 x2 x1");
    project.file("b.txt", "x2 x3");

    project
        .cmd()
        .args(["--memoize", "-e", r"x\d", "N", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("N N NN N");
}
