//! Behavioral specs for the rules file.

use crate::prelude::*;

const RULES: &str = r#"
[[rule]]
pattern = "foo"
replacement = "bar"

[[rule]]
pattern = '\d+'
replacement = "N"
"#;

/// > multiregex.toml in the current directory is used
#[test]
fn rules_file_is_discovered() {
    let project = Project::with_rules(RULES);
    project
        .cmd()
        .write_stdin("foo 42")
        .assert()
        .success()
        .stdout("bar N");
}

/// > Discovery walks up from subdirectories to the git root
#[test]
fn rules_file_is_found_from_subdirectory() {
    let project = Project::with_rules(RULES);
    project.file("deep/nested/input.txt", "foo 7\n");

    project
        .cmd()
        .current_dir(project.join("deep/nested"))
        .arg("input.txt")
        .assert()
        .success()
        .stdout("bar N\n");
}

/// > --rules points at an explicit file
#[test]
fn explicit_rules_file() {
    let project = Project::empty();
    project.file("custom/rules.toml", RULES);

    project
        .cmd()
        .args(["--rules", "custom/rules.toml"])
        .write_stdin("foo")
        .assert()
        .success()
        .stdout("bar");
}

/// > MULTIREGEX_RULES sets the rules file
#[test]
fn rules_file_from_env() {
    let project = Project::empty();
    project.file("env-rules.toml", RULES);

    project
        .cmd()
        .env("MULTIREGEX_RULES", project.join("env-rules.toml"))
        .write_stdin("foo 1")
        .assert()
        .success()
        .stdout("bar N");
}

/// > Inline rules are appended after the file's rules
#[test]
fn inline_rules_follow_file_rules() {
    let project = Project::with_rules(RULES);
    project
        .cmd()
        .args(["-e", "foo", "IGNORED", "-e", "baz", "qux"])
        .write_stdin("foo baz")
        .assert()
        .success()
        .stdout("bar qux");
}

/// > --strategy overrides the file's strategy
#[test]
fn strategy_flag_overrides_file() {
    let project = Project::with_rules(
        "strategy = \"brute-force\"\n\
         [[rule]]\npattern = \"a\"\nreplacement = \"b\"\n\
         [[rule]]\npattern = \"b\"\nreplacement = \"c\"\n",
    );

    project.cmd().write_stdin("ab").assert().success().stdout("cc");
    project
        .cmd()
        .args(["-s", "or"])
        .write_stdin("ab")
        .assert()
        .success()
        .stdout("bc");
}

/// > Unknown keys in the rules file are errors
#[test]
fn unknown_key_is_rejected() {
    let project = Project::with_rules("[[rule]]\npattern = \"a\"\nreplace = \"b\"\n");
    project
        .cmd()
        .write_stdin("a")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("multiregex.toml"))
        .stderr(predicates::str::contains("unknown field"));
}

/// > An unknown strategy name is an error
#[test]
fn unknown_strategy_in_file_is_rejected() {
    let project = Project::with_rules("strategy = \"fastest\"\n");
    project
        .cmd()
        .write_stdin("a")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unknown strategy"));
}

/// > A missing explicit rules file is an error
#[test]
fn missing_rules_file_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["-r", "nope.toml"])
        .write_stdin("a")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("nope.toml"));
}

/// > Limits from the file bound the compiled matcher size
#[test]
fn size_limit_from_file_applies() {
    let project = Project::with_rules(
        "[limits]\nsize_limit = 1\n[[rule]]\npattern = \"a\"\nreplacement = \"b\"\n",
    );
    project.cmd().write_stdin("a").assert().code(1);
}
