use crate::common::file::{FileSpec, read_file, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const COMMITTER_NAME: &str = "fake_user";
pub const COMMITTER_DATE: &str = "2024-01-01 12:00:00";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository whose `init` commit already holds three files in nested directories
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three\n".to_string(),
    ));

    run_tig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_tig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tig").expect("Failed to find tig binary");
    cmd.envs(vec![
        ("NO_COLOR", "1"),
        ("TIG_COMMITTER_NAME", COMMITTER_NAME),
        ("TIG_COMMITTER_DATE", COMMITTER_DATE),
    ]);
    cmd.env_remove("TIG_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn tig_commit(dir: &Path, message: &str) -> Command {
    run_tig_command(dir, &["commit", "-m", message])
}

pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.output().expect("Failed to run tig");
    assert!(
        output.status.success(),
        "tig failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

pub fn head_content(dir: &Path) -> String {
    read_file(&dir.join("tig").join("HEAD"))
}

/// Raw content of a branch ref, without the trailing newline
pub fn branch_target(dir: &Path, branch: &str) -> String {
    read_file(&dir.join("tig").join("refs").join(branch))
        .trim_end()
        .to_string()
}
