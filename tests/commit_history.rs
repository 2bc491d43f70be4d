use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::command::{branch_target, init_repository_dir, run_tig_command, stdout_of, tig_commit};
use common::file::{FileSpec, write_file};

const SEPARATOR: &str = "================================================";

#[rstest]
#[case(1)]
#[case(3)]
fn history_lists_every_commit_newest_first(
    init_repository_dir: TempDir,
    #[case] commits: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    for n in 1..=commits {
        write_file(FileSpec::new(dir.join("counter.txt"), format!("{n}\n")));
        tig_commit(dir, &format!("commit {n}")).assert().success();
    }

    let output = stdout_of(run_tig_command(dir, &["commit-history", "master"]));

    assert_eq!(output.matches(SEPARATOR).count(), commits + 1);
    assert!(output.starts_with(&format!(
        "{}\n{SEPARATOR}\nparent ",
        &branch_target(dir, "master")[..6]
    )));

    let messages = output
        .lines()
        .filter_map(|line| line.strip_prefix("message "))
        .collect::<Vec<_>>();
    let mut expected = (1..=commits)
        .rev()
        .map(|n| format!("commit {n}"))
        .collect::<Vec<_>>();
    expected.push("init".to_string());
    assert_eq!(messages, expected);

    // the oldest commit closes the chain
    assert_eq!(output.matches("parent root\n").count(), 1);

    Ok(())
}

#[rstest]
fn history_of_another_branch_stops_at_its_tip(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_tig_command(dir, &["create-branch", "early"])
        .assert()
        .success();
    tig_commit(dir, "later").assert().success();

    let output = stdout_of(run_tig_command(dir, &["commit-history", "early"]));

    assert_eq!(output.matches(SEPARATOR).count(), 1);
    assert!(!output.contains("message later"));

    Ok(())
}

#[rstest]
fn history_of_nonexistent_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tig_command(init_repository_dir.path(), &["commit-history", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch not found"));

    Ok(())
}
