//! Test-only fakes and fixtures for the setup steps.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Result, anyhow};

use crate::config::SetupPaths;
use crate::io::fetch::SourceFetcher;
use crate::io::git::Vcs;
use crate::report::{Level, Reporter};

/// Reporter that records every notification for assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn contains(&self, level: Level, fragment: &str) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|(l, message)| *l == level && message.contains(fragment))
    }
}

impl Reporter for RecordingReporter {
    fn emit(&self, level: Level, message: &str) {
        self.events.borrow_mut().push((level, message.to_string()));
    }
}

/// Fetcher that materializes a minimal `src/.git` tree and counts calls.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    calls: RefCell<u32>,
    fail: bool,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetcher whose every call fails with a fixed network error.
    pub fn failing() -> Self {
        Self {
            calls: RefCell::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.borrow()
    }
}

impl SourceFetcher for FakeFetcher {
    fn fetch(&self, root: &Path) -> Result<()> {
        *self.calls.borrow_mut() += 1;
        if self.fail {
            return Err(anyhow!("fetch: network unreachable"));
        }
        fs::create_dir_all(root.join("src").join(".git"))?;
        Ok(())
    }
}

/// Scripted [`Vcs`] that records calls instead of spawning git.
#[derive(Debug, Default)]
pub struct FakeVcs {
    calls: RefCell<Vec<String>>,
    fail_on: Option<String>,
    fail_on_patch: Option<String>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake whose named operation ("fetch" or "checkout") fails.
    pub fn failing_on(operation: &str) -> Self {
        Self {
            fail_on: Some(operation.to_string()),
            ..Self::default()
        }
    }

    /// Fake that fails when asked to apply the named patch file.
    pub fn failing_on_patch(name: &str) -> Self {
        Self {
            fail_on_patch: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn should_fail(&self, operation: &str) -> bool {
        self.fail_on.as_deref() == Some(operation)
    }
}

impl Vcs for FakeVcs {
    fn fetch_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("fetch {remote} {branch}"));
        if self.should_fail("fetch") {
            return Err(anyhow!("fatal: could not read from remote repository"));
        }
        Ok(())
    }

    fn checkout(&self, reference: &str) -> Result<()> {
        self.record(format!("checkout {reference}"));
        if self.should_fail("checkout") {
            return Err(anyhow!("error: pathspec '{reference}' did not match"));
        }
        Ok(())
    }

    fn head_short_sha(&self) -> Result<String> {
        self.record("rev-parse".to_string());
        Ok("abc1234".to_string())
    }

    fn apply_patch(&self, patch: &Path) -> Result<()> {
        let name = patch
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.record(format!("apply {name}"));
        if self.fail_on_patch.as_deref() == Some(name.as_str()) {
            return Err(anyhow!("error: patch failed: {name}"));
        }
        Ok(())
    }
}

/// Paths for a workspace whose `src/` directory already exists.
pub fn workspace_with_source(root: &Path) -> SetupPaths {
    let paths = SetupPaths::new(root);
    fs::create_dir_all(&paths.source_dir).expect("create source dir");
    paths
}

/// Create an empty file named `name` under `dir`.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "").expect("write file");
    path
}

/// Create a git repository with one commit in `root` (spawns real git).
pub fn init_git_repo(root: &Path) {
    let status = Command::new("git")
        .arg("init")
        .current_dir(root)
        .status()
        .expect("git init");
    assert!(status.success());

    let status = Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(root)
        .status()
        .expect("git config email");
    assert!(status.success());

    let status = Command::new("git")
        .args(["config", "user.name", "test"])
        .current_dir(root)
        .status()
        .expect("git config name");
    assert!(status.success());

    fs::write(root.join("README.md"), "hi\n").expect("write");
    let status = Command::new("git")
        .args(["add", "README.md"])
        .current_dir(root)
        .status()
        .expect("git add");
    assert!(status.success());

    let status = Command::new("git")
        .args(["commit", "-m", "chore: init"])
        .current_dir(root)
        .status()
        .expect("git commit");
    assert!(status.success());
}
