use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::command::{head_content, init_repository_dir, run_tig_command, tig_commit};
use common::file::{FileSpec, read_file, write_file};

#[rstest]
fn switch_branch_restores_committed_content(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("f.txt"), "v1\n".to_string()));
    tig_commit(dir, "v1").assert().success();
    run_tig_command(dir, &["create-branch", "v1-branch"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("f.txt"), "v2\n".to_string()));
    tig_commit(dir, "v2").assert().success();

    run_tig_command(dir, &["switch-branch", "v1-branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'v1-branch'"))
        .stderr(predicate::str::contains("uncommitted changes"));

    assert_eq!(read_file(&dir.join("f.txt")), "v1\n");
    assert_eq!(head_content(dir), "refs/v1-branch\n");

    run_tig_command(dir, &["switch-branch", "master"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("f.txt")), "v2\n");

    Ok(())
}

#[rstest]
fn switch_branch_restores_nested_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_tig_command(dir, &["create-branch", "pristine"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.join("a").join("b").join("3.txt"),
        "changed\n".to_string(),
    ));
    tig_commit(dir, "change nested").assert().success();

    run_tig_command(dir, &["switch-branch", "pristine"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a").join("b").join("3.txt")), "three\n");
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two\n");

    Ok(())
}

#[rstest]
fn switch_branch_keeps_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_tig_command(dir, &["create-branch", "other"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("scratch.txt"), "mine\n".to_string()));

    run_tig_command(dir, &["switch-branch", "other"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("scratch.txt")), "mine\n");

    Ok(())
}

#[rstest]
fn switch_to_nonexistent_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_tig_command(dir, &["switch-branch", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch not found: nonexistent"));

    assert_eq!(head_content(dir), "refs/master\n");

    Ok(())
}
