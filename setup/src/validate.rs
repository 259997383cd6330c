//! Setup validation: read-only checks on the source tree.

use anyhow::{Result, anyhow};

use crate::config::SetupPaths;
use crate::report::Reporter;

/// Confirm the source tree exists and is a git working copy.
///
/// Purely a filesystem check; no subprocess is spawned and nothing is
/// modified. The `.git` marker may be a directory or a file (worktrees).
pub fn validate_setup(paths: &SetupPaths, reporter: &dyn Reporter) -> Result<()> {
    reporter.info("Validating Chromium setup...");

    if !paths.source_dir.exists() {
        reporter.error("Chromium source code does not exist. Validation failed.");
        return Err(anyhow!(
            "source tree not found at {}",
            paths.source_dir.display()
        ));
    }

    if !paths.vcs_marker().exists() {
        reporter.error("Chromium directory is not a valid git repository. Validation failed.");
        return Err(anyhow!(
            "{} is not a valid git working copy (missing .git)",
            paths.source_dir.display()
        ));
    }

    reporter.success("Chromium setup validated successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Level;
    use crate::test_support::RecordingReporter;
    use std::fs;

    #[test]
    fn fails_when_source_tree_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = SetupPaths::new(temp.path());
        let reporter = RecordingReporter::new();

        let err = validate_setup(&paths, &reporter).unwrap_err();
        assert!(err.to_string().contains("source tree not found"));
        assert!(reporter.contains(Level::Error, "does not exist"));
    }

    #[test]
    fn fails_when_vcs_marker_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = SetupPaths::new(temp.path());
        fs::create_dir_all(&paths.source_dir).expect("mkdir src");
        let reporter = RecordingReporter::new();

        let err = validate_setup(&paths, &reporter).unwrap_err();
        assert!(err.to_string().contains("not a valid git working copy"));
    }

    #[test]
    fn succeeds_for_git_working_copy() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = SetupPaths::new(temp.path());
        fs::create_dir_all(paths.vcs_marker()).expect("mkdir src/.git");
        let reporter = RecordingReporter::new();

        validate_setup(&paths, &reporter).expect("validate");
        assert!(reporter.contains(Level::Success, "validated successfully"));
    }

    #[test]
    fn accepts_gitfile_marker() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = SetupPaths::new(temp.path());
        fs::create_dir_all(&paths.source_dir).expect("mkdir src");
        fs::write(paths.vcs_marker(), "gitdir: ../elsewhere\n").expect("write .git file");
        let reporter = RecordingReporter::new();

        validate_setup(&paths, &reporter).expect("validate");
    }
}
