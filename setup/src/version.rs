//! Version selection: advance the source tree to the remote branch tip.

use anyhow::{Result, anyhow};

use crate::config::{SetupConfig, SetupPaths};
use crate::io::git::Vcs;
use crate::report::Reporter;

/// Fetch the configured branch, check out its tip, and return the short
/// commit id now at HEAD.
///
/// Operations run in that fixed order and the first failure aborts the step
/// with the tool's error text unmodified. There is no rollback: if the fetch
/// lands but the checkout fails, the tree is left as-is.
pub fn select_version<V: Vcs>(
    paths: &SetupPaths,
    config: &SetupConfig,
    vcs: &V,
    reporter: &dyn Reporter,
) -> Result<String> {
    if !paths.source_dir.exists() {
        return Err(anyhow!(
            "source tree not found at {} (fetch it first)",
            paths.source_dir.display()
        ));
    }

    reporter.info(&format!(
        "Fetching latest chromium {} branch...",
        config.branch
    ));
    vcs.fetch_branch(&config.remote, &config.branch)?;
    vcs.checkout(&config.checkout_ref())?;

    let commit = vcs.head_short_sha()?;
    reporter.success(&format!("Checked out Chromium at commit {commit}"));
    Ok(commit)
}
