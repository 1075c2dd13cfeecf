//! End-to-end tests for the assembled output line.

mod common;

use common::{stdout_line, TestEnv};
use predicates::prelude::*;

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn test_appends_by_default() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/usr/bin:/bin").args(["-b", "/opt/bin", "/sbin"])),
        "/usr/bin:/bin:/opt/bin:/sbin"
    );
}

#[test]
fn test_front_keeps_argument_order() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/usr/bin").args(["-b", "-f", "/x", "/y"])),
        "/x:/y:/usr/bin"
    );
}

#[test]
fn test_empty_source() {
    let env = TestEnv::new();
    assert_eq!(stdout_line(env.command("").args(["-b", "/x", "/y"])), "/x:/y");
    assert_eq!(stdout_line(env.command("").args(["-b", "-f", "/x"])), "/x");
}

#[test]
fn test_unset_source_reads_as_empty() {
    let env = TestEnv::new();
    assert_eq!(stdout_line(env.command_bare().args(["-b", "/x"])), "/x");
}

#[test]
fn test_alternate_source_variable() {
    let env = TestEnv::new();
    let line = stdout_line(
        env.command("/bin")
            .env("MANPATH", "/usr/share/man")
            .args(["-b", "-p", "MANPATH", "/opt/man"]),
    );
    assert_eq!(line, "/usr/share/man:/opt/man");
}

/// Bytes that are not valid UTF-8 are carried through untouched.
#[test]
#[cfg(unix)]
fn test_non_utf8_elements_pass_through() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let env = TestEnv::new();
    let output = env
        .command_bare()
        .env("PATH", OsStr::from_bytes(b"/a:/caf\xe9"))
        .arg("-b")
        .arg(OsStr::from_bytes(b"/\xff"))
        .arg(OsStr::from_bytes(b"/caf\xe9"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"/a:/caf\xe9:/\xff\n");
    assert!(output.stderr.is_empty());
}

// ============================================================================
// Duplicates
// ============================================================================

#[test]
fn test_duplicates_dropped() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/usr/bin:/bin").args(["-b", "/bin", "/usr/bin"])),
        "/usr/bin:/bin"
    );
}

#[test]
fn test_duplicates_allowed_with_flag() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/usr/bin:/bin").args(["-b", "-d", "/bin"])),
        "/usr/bin:/bin:/bin"
    );
}

/// Only the original value counts; repeated arguments are both added.
#[test]
fn test_repeated_arguments_not_deduplicated() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/a").args(["-b", "/x", "/x"])),
        "/a:/x:/x"
    );
}

#[test]
fn test_duplicate_match_is_whole_element() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/usr/local/bin").args(["-b", "/usr", "bin"])),
        "/usr/local/bin:/usr:bin"
    );
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn test_variables_expanded() {
    let env = TestEnv::new();
    let line = stdout_line(
        env.command("/bin")
            .env("HOME", "/home/me")
            .args(["-b", "$HOME/bin"]),
    );
    assert_eq!(line, "/bin:/home/me/bin");
}

#[test]
fn test_undefined_variable_drops_element() {
    let env = TestEnv::new();
    env.command("/bin")
        .args(["-b", "$NOPE/bin", "/ok"])
        .assert()
        .success()
        .stdout("/bin:/ok\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_escaped_dollar_is_literal() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/bin").args(["-b", r"/opt/\$x"])),
        "/bin:/opt/$x"
    );
}

/// An expanded element that is already present is still a duplicate.
#[test]
fn test_expanded_duplicate_dropped() {
    let env = TestEnv::new();
    let line = stdout_line(
        env.command("/home/me/bin")
            .env("HOME", "/home/me")
            .args(["-b", "$HOME/bin"]),
    );
    assert_eq!(line, "/home/me/bin");
}

// ============================================================================
// Quick Exit
// ============================================================================

#[test]
fn test_if_set_unset_prints_original() {
    let env = TestEnv::new();
    env.command("/a:/b")
        .args(["-b", "-e", "GATE", "/c"])
        .assert()
        .success()
        .stdout("/a:/b\n");
}

#[test]
fn test_if_set_defined_adds() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/a:/b").env("GATE", "").args(["-b", "-e", "GATE", "/c"])),
        "/a:/b:/c"
    );
}

#[test]
fn test_if_set_quick_exit_is_formatted() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(env.command("/a:/b").args(["-c", "-s", "-e", "GATE", "/c"])),
        "/a /b"
    );
}

#[test]
fn test_every_if_set_must_be_defined() {
    let env = TestEnv::new();
    assert_eq!(
        stdout_line(
            env.command("/a")
                .env("ONE", "1")
                .args(["-b", "-e", "ONE", "-e", "TWO", "/c"])
        ),
        "/a"
    );
}

// ============================================================================
// Existence Check
// ============================================================================

#[test]
fn test_check_exists_keeps_only_directories() {
    let env = TestEnv::new();
    let present = env.create_dir("present");
    let absent = env.missing("absent");
    let file = env.path().join("file");
    std::fs::write(&file, "").unwrap();
    let file = file.to_str().unwrap().to_string();

    assert_eq!(
        stdout_line(env.command("/a").args(["-b", "-x", present.as_str(), absent.as_str(), file.as_str()])),
        format!("/a:{present}")
    );
    assert_eq!(
        stdout_line(env.command("/a").args(["-b", present.as_str(), absent.as_str()])),
        format!("/a:{present}:{absent}")
    );
}

#[test]
fn test_check_exists_after_expansion() {
    let env = TestEnv::new();
    let present = env.create_dir("present");
    let line = stdout_line(
        env.command("")
            .env("ROOT", env.path().to_str().unwrap())
            .args(["-b", "-x", "$ROOT/present", "$ROOT/absent"]),
    );
    assert_eq!(line, present);
}

// ============================================================================
// Verbosity
// ============================================================================

#[test]
fn test_verbose_explains_drops() {
    let env = TestEnv::new();
    env.command("/a")
        .args(["--verbose", "-b", "/a", "$NOPE"])
        .assert()
        .success()
        .stdout("/a\n")
        .stderr(predicate::str::contains("skipping '/a'"))
        .stderr(predicate::str::contains("skipping '$NOPE'"));
}

#[test]
fn test_log_mode_variable() {
    let env = TestEnv::new();
    env.command("/a")
        .env("ADDPATH_LOG_MODE", "verbose")
        .args(["-b", "/a"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping '/a'"));

    env.command("/a")
        .env("ADDPATH_LOG_MODE", "verbose")
        .args(["--quiet", "-b", "/a"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
