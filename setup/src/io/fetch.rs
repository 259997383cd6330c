//! Adapter for the tool that populates the source tree.
//!
//! The stock command is depot_tools `fetch --nohooks chromium`, which creates
//! `<root>/src` plus its gclient metadata. The command is configurable via
//! `setup.toml` so tests (and non-stock checkouts) can substitute their own.

use std::path::Path;
use std::process::Command;

use anyhow::{Result, anyhow};
use tracing::{info, instrument};

use crate::config::FetchConfig;
use crate::io::process::run_streaming;

/// Tool that materializes the source tree under a workspace root.
pub trait SourceFetcher {
    /// Populate `<root>/src`. Only called when the tree is absent.
    fn fetch(&self, root: &Path) -> Result<()>;
}

/// [`SourceFetcher`] that spawns the configured fetch command in `root`,
/// streaming tool output to the terminal.
#[derive(Debug, Clone)]
pub struct DepotTools {
    command: Vec<String>,
}

impl DepotTools {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            command: config.command.clone(),
        }
    }
}

impl SourceFetcher for DepotTools {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn fetch(&self, root: &Path) -> Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| anyhow!("fetch command is empty"))?;
        info!(command = %self.command.join(" "), "fetching source tree");

        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(root);
        run_streaming(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(command: &[&str]) -> DepotTools {
        DepotTools::new(&FetchConfig {
            command: command.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    #[test]
    fn fetch_runs_configured_command_in_root() {
        let temp = tempfile::tempdir().expect("tempdir");

        fetcher(&["mkdir", "src"]).fetch(temp.path()).expect("fetch");

        assert!(temp.path().join("src").is_dir());
    }

    #[test]
    fn fetch_propagates_nonzero_exit() {
        let temp = tempfile::tempdir().expect("tempdir");

        let err = fetcher(&["false"]).fetch(temp.path()).unwrap_err();
        assert!(err.to_string().contains("false failed:"));
    }
}
