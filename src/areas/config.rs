//! Repository configuration (`tig/.config`)
//!
//! ```text
//! name <committer name>
//! cwd <working directory>
//! ```

use crate::artifacts::core::write_atomically;
use crate::errors::{Error, IoResultExt, Result};
use std::path::{Path, PathBuf};

const NAME_KEY: &str = "name";
const CWD_KEY: &str = "cwd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    name: String,
    cwd: PathBuf,
}

impl Config {
    pub fn new(name: impl Into<String>, cwd: impl Into<PathBuf>) -> Result<Self> {
        let name = name.into();

        // the name becomes a single line of every commit
        if name.trim().is_empty() || name.contains(['\n', '\r']) {
            return Err(Error::Config(format!("invalid committer name {name:?}")));
        }

        Ok(Config {
            name,
            cwd: cwd.into(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        Self::parse(&content)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        write_atomically(path, self.to_string().as_bytes())
    }

    pub fn committer_name(&self) -> &str {
        &self.name
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    fn parse(content: &str) -> Result<Self> {
        let mut name = None;
        let mut cwd = None;

        for line in content.lines() {
            match line.split_once(' ') {
                Some((NAME_KEY, value)) => name = Some(value),
                Some((CWD_KEY, value)) => cwd = Some(value),
                _ => {}
            }
        }

        let name = name.ok_or_else(|| Error::Config(format!("missing `{NAME_KEY}` entry")))?;
        let cwd = cwd.ok_or_else(|| Error::Config(format!("missing `{CWD_KEY}` entry")))?;
        Self::new(name, cwd)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{NAME_KEY} {}", self.name)?;
        writeln!(f, "{CWD_KEY} {}", self.cwd.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tig").join(".config");
        let config = Config::new("Ada Lovelace", "/work/project").unwrap();

        config.write(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "name Ada Lovelace\ncwd /work/project\n"
        );
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_name_is_a_config_error() {
        let err = Config::parse("cwd /work\n").unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("two\nlines")]
    fn rejects_names_that_break_the_commit_format(#[case] name: &str) {
        assert!(Config::new(name, "/work").is_err());
    }
}
