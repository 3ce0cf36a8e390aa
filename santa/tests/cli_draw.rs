//! CLI tests for `santa draw` and `santa check`.
//!
//! Spawns the santa binary and verifies exit codes match expected values for
//! solvable, infeasible, and misconfigured rosters.

use std::fs;
use std::path::Path;
use std::process::Command;

use santa::exit_codes;
use santa::io::init::{InitOptions, SantaPaths, init_config};

fn santa(dir: &Path, args: &[&str]) -> std::process::ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_santa"))
        .current_dir(dir)
        .args(args)
        .status()
        .expect("run santa")
}

const INFEASIBLE_CONFIG: &str = r#"
[[participants]]
key = "alice"
name = "Alice"

[[participants]]
key = "bob"
name = "Bob"

[[forbidden]]
giver = "alice"
receiver = "bob"
"#;

#[test]
fn draw_on_sample_config_succeeds() {
    let temp = tempfile::tempdir().expect("tempdir");
    init_config(
        &temp.path().join("santa.toml"),
        &InitOptions { force: false },
    )
    .expect("init");

    let status = santa(temp.path(), &["draw"]);
    assert_eq!(status.code(), Some(exit_codes::OK));

    let paths = SantaPaths::new(temp.path().join("out"));
    assert!(paths.summary_path.is_file());
    assert!(paths.audit_path.is_file());
    for key in ["alice", "bob", "carol"] {
        assert!(paths.notification_path(key).is_file());
    }
}

#[test]
fn draw_on_infeasible_config_exits_with_infeasible_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("santa.toml"), INFEASIBLE_CONFIG).expect("write config");

    let status = santa(temp.path(), &["draw"]);
    assert_eq!(status.code(), Some(exit_codes::INFEASIBLE));
}

#[test]
fn check_on_infeasible_config_exits_with_infeasible_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("santa.toml"), INFEASIBLE_CONFIG).expect("write config");

    let status = santa(temp.path(), &["check"]);
    assert_eq!(status.code(), Some(exit_codes::INFEASIBLE));
}

#[test]
fn draw_with_one_participant_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("santa.toml"),
        "[[participants]]\nkey = \"alice\"\nname = \"Alice\"\n",
    )
    .expect("write config");

    let status = santa(temp.path(), &["draw"]);
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}

#[test]
fn draw_without_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = santa(temp.path(), &["draw"]);
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
