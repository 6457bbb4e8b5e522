//! CLI surface tests: argument validation must reject bad input before any
//! mount is attempted, so none of these need the real utility installed.

use assert_cmd::Command;
use predicates::prelude::*;

fn epsxe_launch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_epsxe-launch"))
}

#[test]
fn rejects_missing_arguments() {
    epsxe_launch()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn rejects_single_argument() {
    epsxe_launch()
        .arg("epsxe.exe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn rejects_emulator_with_wrong_stem() {
    let tmp = tempfile::tempdir().unwrap();
    let emulator = tmp.path().join("pcsx.exe");
    let archive = tmp.path().join("game.mbi");
    std::fs::write(&emulator, b"stub").unwrap();
    std::fs::write(&archive, b"stub").unwrap();

    epsxe_launch()
        .args([&emulator, &archive])
        .assert()
        .failure()
        .stderr(predicate::str::contains("epsxe path is invalid"));
}

#[test]
fn rejects_nonexistent_emulator() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("game.mbi");
    std::fs::write(&archive, b"stub").unwrap();

    epsxe_launch()
        .args([&tmp.path().join("epsxe.exe"), &archive])
        .assert()
        .failure()
        .stderr(predicate::str::contains("epsxe path is invalid"));
}

#[test]
fn rejects_nonexistent_archive() {
    let tmp = tempfile::tempdir().unwrap();
    let emulator = tmp.path().join("epsxe.exe");
    std::fs::write(&emulator, b"stub").unwrap();

    epsxe_launch()
        .args([&emulator, &tmp.path().join("missing.mbi")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("archive path is invalid"));
}
