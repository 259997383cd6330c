//! Source acquisition: ensure the source tree exists.

use anyhow::Result;
use tracing::debug;

use crate::config::SetupPaths;
use crate::io::fetch::SourceFetcher;
use crate::report::Reporter;

/// Ensure the source tree exists, fetching it if absent.
///
/// An existing tree is trusted as-is: the fetcher is not invoked and the
/// step succeeds immediately. A failed fetch propagates the tool's error
/// without retry.
pub fn acquire_source<F: SourceFetcher>(
    paths: &SetupPaths,
    fetcher: &F,
    reporter: &dyn Reporter,
) -> Result<()> {
    reporter.info("Downloading Chromium source code...");

    if paths.source_dir.exists() {
        debug!(source_dir = %paths.source_dir.display(), "source tree present, skipping fetch");
        reporter.info("Chromium source code already exists. Skipping download.");
        return Ok(());
    }

    fetcher.fetch(&paths.root)?;
    reporter.success("Chromium source code downloaded successfully.");
    Ok(())
}
