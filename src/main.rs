use anyhow::Result;
use clap::{Parser, Subcommand};
use tig::areas::repository::Repository;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TIG_LOG=debug`
const LOG_ENV: &str = "TIG_LOG";

#[derive(Parser)]
#[command(
    name = "tig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version control system",
    long_about = "tig snapshots a working directory into content-addressed blobs and trees, \
    chains snapshots into commits on named branches, and diffs files line by line.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the tig control directory in the current directory \
        or at the specified path, and records the working directory as the first commit on master."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
        #[arg(
            short,
            long,
            env = "TIG_COMMITTER_NAME",
            help = "The committer name recorded in every commit"
        )]
        name: String,
    },
    #[command(
        name = "commit",
        about = "Record the working directory as a new commit",
        long_about = "This command snapshots the working directory and advances the active branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "create-branch",
        about = "Create a branch at the current commit",
        long_about = "This command creates a new branch pointing at the active branch's commit. \
        The active branch does not change."
    )]
    CreateBranch {
        #[arg(index = 1, help = "The name of the new branch")]
        name: String,
    },
    #[command(
        name = "switch-branch",
        about = "Restore a branch's files and make it the active branch",
        long_about = "This command overwrites tracked files with the branch's last commit. \
        Uncommitted changes to those files are lost; untracked files are kept."
    )]
    SwitchBranch {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
    #[command(
        name = "commit-history",
        about = "Show the commits of a branch, newest first"
    )]
    CommitHistory {
        #[arg(index = 1, help = "The branch whose history to print")]
        branch: String,
    },
    #[command(name = "list-branch", about = "List all branches and their commits")]
    ListBranch,
    #[command(
        name = "diff",
        about = "Diff a file against its last committed version",
        long_about = "This command compares a working file with the blob of the same name in the \
        active branch's commit, stores the result as a patch object and prints it."
    )]
    Diff {
        #[arg(index = 1, help = "The file to diff")]
        file: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file as a blob and optionally write it to the object store"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "cat-file", about = "Print the payload of an object")]
    CatFile {
        #[arg(index = 1, help = "The object hash to print")]
        sha: String,
    },
    #[command(name = "ls-tree", about = "List the entries of a tree object")]
    LsTree {
        #[arg(short, long, help = "Descend into subtrees")]
        recursive: bool,
        #[arg(index = 1, help = "The tree hash to list")]
        sha: String,
    },
    #[command(
        name = "apply-patch",
        about = "Replay a stored patch over a file and print the result"
    )]
    ApplyPatch {
        #[arg(index = 1, help = "The patch hash")]
        patch: String,
        #[arg(index = 2, help = "The file holding the base lines")]
        file: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_current_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;

    Ok(Repository::new(&pwd, Box::new(std::io::stdout()))?)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path, name } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => open_current_repository()?,
            };

            repository.init(name)?
        }
        Commands::Commit { message } => open_current_repository()?.commit(message)?,
        Commands::CreateBranch { name } => open_current_repository()?.branch(name)?,
        Commands::SwitchBranch { name } => open_current_repository()?.switch_branch(name)?,
        Commands::CommitHistory { branch } => open_current_repository()?.commit_history(branch)?,
        Commands::ListBranch => open_current_repository()?.list_branch()?,
        Commands::Diff { file } => open_current_repository()?.diff(file)?,
        Commands::HashObject { write, file } => {
            open_current_repository()?.hash_object(file, *write)?
        }
        Commands::CatFile { sha } => open_current_repository()?.cat_file(sha)?,
        Commands::LsTree { recursive, sha } => {
            open_current_repository()?.ls_tree(sha, *recursive)?
        }
        Commands::ApplyPatch { patch, file } => {
            open_current_repository()?.apply_patch(patch, file)?
        }
    }

    Ok(())
}
