use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::command::{
    branch_target, head_content, init_repository_dir, run_tig_command, stdout_of, tig_commit,
};
use common::file::{FileSpec, write_file};

#[rstest]
fn create_branch_at_current_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_tig_command(dir, &["create-branch", "feature-branch"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created branch feature-branch at "));

    assert_eq!(
        branch_target(dir, "feature-branch"),
        branch_target(dir, "master")
    );
    assert_eq!(head_content(dir), "refs/master\n");

    Ok(())
}

#[rstest]
fn create_duplicate_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let branch_name = "feature-branch";

    // create the branch first time - should succeed
    run_tig_command(dir, &["create-branch", branch_name])
        .assert()
        .success();
    let target = branch_target(dir, branch_name);

    write_file(FileSpec::new(dir.join("new.txt"), "new\n".to_string()));
    tig_commit(dir, "move master").assert().success();

    // attempt to create the same branch again - should fail
    run_tig_command(dir, &["create-branch", branch_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(branch_target(dir, branch_name), target);

    Ok(())
}

#[rstest]
#[case("../outside")]
#[case(".hidden")]
#[case("has space")]
#[case("ends.lock")]
fn create_branch_with_invalid_name(
    init_repository_dir: TempDir,
    #[case] branch_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tig_command(init_repository_dir.path(), &["create-branch", branch_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));

    Ok(())
}

#[rstest]
fn create_branch_with_hierarchical_name(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_tig_command(dir, &["create-branch", "feature/login"])
        .assert()
        .success();

    assert!(dir.join("tig").join("refs").join("feature").join("login").is_file());

    Ok(())
}

#[rstest]
fn list_branches(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_tig_command(dir, &["create-branch", "zeta"]).assert().success();
    run_tig_command(dir, &["create-branch", "alpha"]).assert().success();
    let short = &branch_target(dir, "master")[..6];

    let output = stdout_of(run_tig_command(dir, &["list-branch"]));

    assert_eq!(
        output,
        format!(
            "  Branch\tCommit\n===============\n  alpha\t{short}\n* master\t{short}\n  zeta\t{short}\n"
        )
    );

    Ok(())
}
