//! Git adapter for the setup steps.
//!
//! All version-control work is delegated to the `git` binary; this wrapper
//! contributes only argument plumbing and error text. The [`Vcs`] trait is
//! the seam tests use to substitute scripted fakes.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use tracing::{debug, instrument};

use crate::io::process::{run_capture, run_streaming};

/// Version-control operations the setup steps depend on.
///
/// Implementations report success/failure via `Result`; error messages carry
/// the underlying tool's diagnostic text unmodified.
pub trait Vcs {
    /// Fetch `branch` from `remote`.
    fn fetch_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Check out a reference (remote branch tip, tag, or commit).
    fn checkout(&self, reference: &str) -> Result<()>;

    /// Short commit id of the current HEAD.
    fn head_short_sha(&self) -> Result<String>;

    /// Apply a unified-diff patch file onto the working tree.
    fn apply_patch(&self, patch: &Path) -> Result<()>;
}

/// [`Vcs`] implementation that spawns `git` in a fixed working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.workdir);
        cmd
    }
}

impl Vcs for GitCli {
    #[instrument(skip_all, fields(remote, branch))]
    fn fetch_branch(&self, remote: &str, branch: &str) -> Result<()> {
        debug!("fetching remote branch");
        run_streaming(self.command(&["fetch", remote, branch]))
    }

    #[instrument(skip_all, fields(reference))]
    fn checkout(&self, reference: &str) -> Result<()> {
        debug!("checking out reference");
        run_streaming(self.command(&["checkout", reference]))
    }

    fn head_short_sha(&self) -> Result<String> {
        run_capture(self.command(&["rev-parse", "--short", "HEAD"]))
    }

    #[instrument(skip_all, fields(patch = %patch.display()))]
    fn apply_patch(&self, patch: &Path) -> Result<()> {
        debug!("applying patch");
        let mut cmd = Command::new("git");
        cmd.arg("apply").arg(patch).current_dir(&self.workdir);
        run_streaming(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_git_repo;
    use std::fs;

    // Rewrites the README line so a second apply has no matching context.
    const README_PATCH: &str = "--- a/README.md\n\
                                +++ b/README.md\n\
                                @@ -1 +1 @@\n\
                                -hi\n\
                                +patched\n";

    #[test]
    fn head_short_sha_reads_current_commit() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_git_repo(temp.path());

        let git = GitCli::new(temp.path());
        let sha = git.head_short_sha().expect("rev-parse");
        assert!(!sha.is_empty());
        assert!(sha.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn apply_patch_modifies_the_worktree() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_git_repo(temp.path());
        let patch = temp.path().join("0001-readme.patch");
        fs::write(&patch, README_PATCH).expect("write patch");

        let git = GitCli::new(temp.path());
        git.apply_patch(&patch).expect("apply");

        let readme = fs::read_to_string(temp.path().join("README.md")).expect("read README");
        assert!(readme.contains("patched"));
    }

    #[test]
    fn double_apply_fails_with_git_diagnostic() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_git_repo(temp.path());
        let patch = temp.path().join("0001-readme.patch");
        fs::write(&patch, README_PATCH).expect("write patch");

        let git = GitCli::new(temp.path());
        git.apply_patch(&patch).expect("first apply");
        let err = git.apply_patch(&patch).unwrap_err();
        assert!(err.to_string().contains("failed:"));
    }

    #[test]
    fn checkout_unknown_ref_propagates_stderr() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_git_repo(temp.path());

        let git = GitCli::new(temp.path());
        let err = git.checkout("no-such-ref").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("git checkout no-such-ref failed:"));
        assert!(msg.contains("no-such-ref"));
    }
}
