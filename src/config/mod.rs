//! Runtime configuration for `tk`.
//!
//! Settings come from command-line flags with environment fallbacks
//! (resolved by clap):
//! - `--home` / `GOTICKETS_HOME`: base directory holding `.gotickets/`
//! - `--json`: machine-readable output
//! - `-v` / `-q`: log verbosity

use std::path::PathBuf;
use std::sync::Arc;

use tickets_lib::{FileSystem, OsFileSystem};

use crate::cli::Cli;

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "GOTICKETS_HOME";

/// Resolved settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub home: Option<PathBuf>,
    pub json: bool,
    pub verbose: u8,
    pub quiet: bool,
}

impl Config {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            home: cli.home.clone(),
            json: cli.json,
            verbose: cli.verbose,
            quiet: cli.quiet,
        }
    }

    /// Filesystem rooted at the configured home directory.
    #[must_use]
    pub fn filesystem(&self) -> Arc<dyn FileSystem> {
        match &self.home {
            Some(home) => Arc::new(OsFileSystem::with_home(home)),
            None => Arc::new(OsFileSystem::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickets_lib::paths::tickets_path;

    #[test]
    fn test_home_override_roots_data_dir() {
        let config = Config {
            home: Some(PathBuf::from("/tmp/tk-home")),
            ..Config::default()
        };
        let fs = config.filesystem();
        assert_eq!(
            tickets_path(fs.as_ref()).unwrap(),
            PathBuf::from("/tmp/tk-home/.gotickets/tickets.json")
        );
    }
}
