//! Workspace paths and the optional `setup.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Canonical paths within a setup workspace root.
///
/// Constructed once at process entry and passed into every step, so steps
/// never depend on ambient working-directory state.
#[derive(Debug, Clone)]
pub struct SetupPaths {
    pub root: PathBuf,
    /// Chromium source tree (`<root>/src`).
    pub source_dir: PathBuf,
    /// Local patch files (`<root>/patches`).
    pub patches_dir: PathBuf,
}

impl SetupPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let source_dir = root.join("src");
        let patches_dir = root.join("patches");
        Self {
            root,
            source_dir,
            patches_dir,
        }
    }

    /// Marker that identifies `source_dir` as a git working copy.
    pub fn vcs_marker(&self) -> PathBuf {
        self.source_dir.join(".git")
    }
}

/// Setup configuration (TOML).
///
/// Stored at `<root>/setup.toml` and edited by humans. Missing fields (or a
/// missing file) default to the stock Chromium values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SetupConfig {
    /// Remote whose branch tip the source tree is advanced to.
    pub remote: String,

    /// Branch to fetch and check out.
    pub branch: String,

    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FetchConfig {
    /// Command that populates `<root>/src` (e.g. depot_tools `fetch`).
    pub command: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            command: vec![
                "fetch".to_string(),
                "--nohooks".to_string(),
                "chromium".to_string(),
            ],
        }
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

impl SetupConfig {
    /// Reference handed to `git checkout` (the remote branch tip).
    pub fn checkout_ref(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }

    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(anyhow!("remote must be non-empty"));
        }
        if self.branch.trim().is_empty() {
            return Err(anyhow!("branch must be non-empty"));
        }
        if self.fetch.command.is_empty() || self.fetch.command[0].trim().is_empty() {
            return Err(anyhow!("fetch.command must be a non-empty array"));
        }
        Ok(())
    }
}

/// Load config from `<root>/setup.toml`.
///
/// If the file is missing, returns `SetupConfig::default()`.
pub fn load_config(root: &Path) -> Result<SetupConfig> {
    let path = root.join("setup.toml");
    if !path.exists() {
        let cfg = SetupConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SetupConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_root() {
        let paths = SetupPaths::new("/work");
        assert_eq!(paths.source_dir, Path::new("/work/src"));
        assert_eq!(paths.patches_dir, Path::new("/work/patches"));
        assert_eq!(paths.vcs_marker(), Path::new("/work/src/.git"));
    }

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(temp.path()).expect("load");
        assert_eq!(cfg, SetupConfig::default());
        assert_eq!(cfg.checkout_ref(), "origin/main");
    }

    #[test]
    fn load_parses_overrides_and_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("setup.toml"), "branch = \"stable\"\n").expect("write");

        let cfg = load_config(temp.path()).expect("load");
        assert_eq!(cfg.branch, "stable");
        assert_eq!(cfg.remote, "origin");
        assert_eq!(cfg.checkout_ref(), "origin/stable");
        assert_eq!(cfg.fetch.command[0], "fetch");
    }

    #[test]
    fn load_rejects_empty_fetch_command() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("setup.toml"), "[fetch]\ncommand = []\n").expect("write");

        let err = load_config(temp.path()).unwrap_err();
        assert!(err.to_string().contains("fetch.command"));
    }
}
