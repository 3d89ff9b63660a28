mod common;

use assert_cmd::Command;
use clap::Parser;
use common::create_fixture;
use filetree::cli::Args;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help_flag() {
    Command::cargo_bin("filetree")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collapsible HTML page"))
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--ignore-file"))
        .stdout(predicate::str::contains("--ascii"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("filetree")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("filetree"));
}

#[test]
fn test_defaults_write_filetree_html_in_cwd() {
    let tmp = create_fixture(&["src/main.rs", "README.md"]);
    Command::cargo_bin("filetree")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success();
    let html = fs::read_to_string(tmp.path().join("filetree.html")).unwrap();
    assert!(html.contains("<span class=\"caret closed-folder\">src</span>"));
    assert!(html.contains("<li>main.rs</li>"));
    assert!(html.contains("<li>README.md</li>"));
}

#[test]
fn test_explicit_input_and_output() {
    let input = create_fixture(&["zeta/", "b.txt", "A.txt"]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("tree.html");
    Command::cargo_bin("filetree")
        .unwrap()
        .arg(input.path())
        .arg(&output)
        .arg("--ascii")
        .assert()
        .success()
        .stdout("├── zeta\n├── A.txt\n└── b.txt\n");
    assert!(output.exists());
}

#[test]
fn test_gitignore_and_cli_rules_apply() {
    let input = create_fixture(&["build_output/x.txt", "node_modules/pkg.js", "src/lib.rs"]);
    fs::write(input.path().join(".gitignore"), "# generated\nbuild\n").unwrap();
    let out_dir = TempDir::new().unwrap();
    Command::cargo_bin("filetree")
        .unwrap()
        .arg(input.path())
        .arg(out_dir.path().join("out.html"))
        .args(["-I", "node_modules", "--ascii"])
        .assert()
        .success()
        .stdout("└── src\n    └── lib.rs\n");
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    let out_dir = TempDir::new().unwrap();
    Command::cargo_bin("filetree")
        .unwrap()
        .arg("/this/path/does/not/exist")
        .arg(out_dir.path().join("out.html"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("filetree:"))
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_file_path_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("afile.txt");
    fs::write(&file, "hello").unwrap();

    Command::cargo_bin("filetree")
        .unwrap()
        .arg(&file)
        .arg(tmp.path().join("out.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let input = create_fixture(&["a.txt"]);
    Command::cargo_bin("filetree")
        .unwrap()
        .arg(input.path())
        .arg(input.path().join("missing_dir").join("out.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create output"));
}

#[test]
fn test_completions_printed_to_stdout() {
    Command::cargo_bin("filetree")
        .unwrap()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filetree"));
}

#[test]
fn test_man_page_printed_to_stdout() {
    Command::cargo_bin("filetree")
        .unwrap()
        .arg("--man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}

// --- Argument parsing ---

#[test]
fn test_positional_defaults() {
    let args = Args::parse_from(["filetree"]);
    assert_eq!(args.input, std::path::PathBuf::from("."));
    assert_eq!(args.output, std::path::PathBuf::from("filetree.html"));
    assert_eq!(args.ignore_file, ".gitignore");
    assert_eq!(args.title, "File Tree");
    assert!(!args.no_follow_symlinks);
}

#[test]
fn test_multiple_ignore_patterns() {
    let args = Args::parse_from(["filetree", "-I", "*.log", "-I", "node_modules", "."]);
    assert_eq!(args.ignore, vec!["*.log", "node_modules"]);
}

#[test]
fn test_verbose_count_levels() {
    let args = Args::parse_from(["filetree", "-vv", "."]).validated();
    assert_eq!(args.verbose, 2);
    assert_eq!(args.log_level(), "debug");
}

#[test]
fn test_quiet_resets_verbose() {
    let args = Args::parse_from(["filetree", "-vv", "--quiet", "."]).validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
    assert_eq!(args.log_level(), "error");
}

#[test]
fn test_completions_conflict_with_man() {
    let result = Args::try_parse_from(["filetree", "--man", "--completions", "zsh"]);
    assert!(result.is_err());
}

#[test]
fn test_symlinks_followed_unless_disabled() {
    let args = Args::parse_from(["filetree", "."]);
    assert!(!args.no_follow_symlinks);
    let args = Args::parse_from(["filetree", "-P", "."]);
    assert!(args.no_follow_symlinks);
}

#[test]
#[cfg(unix)]
fn test_dangling_symlink_does_not_abort_run() {
    let input = create_fixture(&["a.txt"]);
    std::os::unix::fs::symlink(input.path().join("gone"), input.path().join("dangling")).unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.html");
    Command::cargo_bin("filetree")
        .unwrap()
        .arg(input.path())
        .arg(&output)
        .arg("--ascii")
        .assert()
        .success()
        .stdout("├── a.txt\n└── dangling\n");
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<li>dangling</li>"));
}
