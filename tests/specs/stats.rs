//! Behavioral specs for `--stats` output.

use crate::prelude::*;

/// > Text stats go to stderr, leaving stdout clean
#[test]
fn text_stats_on_stderr() {
    let project = Project::empty();
    project
        .cmd()
        .args(["--stats", "text", "-e", "foo", "bar"])
        .write_stdin("foo foo")
        .assert()
        .success()
        .stdout("bar bar")
        .stderr(predicates::str::contains(
            "<stdin>: 2 matches, 2 replacements",
        ));
}

/// > Text stats list each file and a total
#[test]
fn text_stats_per_file_and_total() {
    let project = Project::empty();
    project.file("a.txt", "foo");
    project.file("b.txt", "foo foo");

    project
        .cmd()
        .args(["--stats", "text", "-i", "-e", "foo", "bar", "a.txt", "b.txt"])
        .assert()
        .success()
        .stderr(predicates::str::contains("a.txt: 1 matches, 1 replacements"))
        .stderr(predicates::str::contains("b.txt: 2 matches, 2 replacements"))
        .stderr(predicates::str::contains("total: 3 matches, 3 replacements"));
}

/// > JSON stats are machine readable
#[test]
fn json_stats() {
    let project = Project::empty();
    let output = project
        .cmd()
        .args(["--stats", "json", "--memoize", "-e", r"\d+", "N"])
        .write_stdin("1 2 1")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"N N N");

    let stats: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(stats["files"][0]["path"], "<stdin>");
    assert_eq!(stats["files"][0]["replacements"], 3);
    assert_eq!(stats["files"][0]["memoized_matches"], 1);
    assert_eq!(stats["files"][0]["memoized_entries"], 2);
    assert_eq!(stats["total"]["replacements"], 3);
}

/// > Without --stats nothing is printed to stderr
#[test]
fn no_stats_by_default() {
    let project = Project::empty();
    project
        .cmd()
        .args(["-e", "foo", "bar"])
        .write_stdin("foo")
        .assert()
        .success()
        .stderr("");
}
