//! Patch application in deterministic sorted order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::config::SetupPaths;
use crate::io::git::Vcs;
use crate::report::Reporter;

/// File-name suffix that marks a directory entry as a patch.
pub const PATCH_SUFFIX: &str = ".patch";

/// List applicable patches: entries named `*.patch`, sorted ascending by
/// file name. A missing directory yields an empty list.
pub fn list_patches(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))?;
    let mut patches = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        if entry.file_name().to_string_lossy().ends_with(PATCH_SUFFIX) {
            patches.push(entry.path());
        }
    }
    // Entries share one parent, so sorting paths sorts file names.
    patches.sort();
    debug!(count = patches.len(), "listed patch files");
    Ok(patches)
}

/// Apply every patch under `paths.patches_dir` onto the source tree.
///
/// Patches apply strictly in sorted-name order, one at a time; the first
/// failure aborts the step with the failing patch named and the tool's
/// diagnostic attached. Already-applied patches are not reverted, and
/// re-running against a patched tree is expected to fail on the first patch
/// whose changes are already present.
///
/// Returns the number of patches applied. A missing or empty patch
/// directory is a trivial success, not an error.
pub fn apply_patches<V: Vcs>(
    paths: &SetupPaths,
    vcs: &V,
    reporter: &dyn Reporter,
) -> Result<usize> {
    reporter.info("Applying patches to Chromium source code...");

    if !paths.source_dir.exists() {
        reporter.error("Chromium source code does not exist. Cannot apply patches.");
        return Err(anyhow!(
            "source tree not found at {}",
            paths.source_dir.display()
        ));
    }

    if !paths.patches_dir.exists() {
        reporter.info("No patches directory found. Skipping patch application.");
        return Ok(0);
    }

    let patches = list_patches(&paths.patches_dir)?;
    if patches.is_empty() {
        reporter.info("No patch files found. Skipping patch application.");
        return Ok(0);
    }

    reporter.info(&format!("Found {} patch(es). Applying...", patches.len()));
    for patch in &patches {
        let name = patch_name(patch);
        reporter.info(&format!("Applying patch: {name}"));
        vcs.apply_patch(patch).with_context(|| {
            format!(
                "failed to apply patch {name}; it may be incompatible with the \
                 checked-out chromium revision"
            )
        })?;
        reporter.success(&format!("Successfully applied patch: {name}"));
    }

    reporter.success("All patches applied successfully.");
    Ok(patches.len())
}

fn patch_name(patch: &Path) -> String {
    patch
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| patch.display().to_string())
}
