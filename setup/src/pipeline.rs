//! Fail-fast orchestration of the four setup steps.

use anyhow::Result;

use crate::acquire::acquire_source;
use crate::config::{SetupConfig, SetupPaths};
use crate::io::fetch::SourceFetcher;
use crate::io::git::Vcs;
use crate::patch::apply_patches;
use crate::report::Reporter;
use crate::validate::validate_setup;
use crate::version::select_version;

/// One named, independently failable unit of the pipeline.
struct Step<'a> {
    name: &'static str,
    run: Box<dyn FnOnce() -> Result<()> + 'a>,
}

/// Run the full setup pipeline: download, checkout, patch, validate.
///
/// Steps run strictly in the fixed order, sequentially; the first failure
/// stops the pipeline and is returned with the step name attached, leaving
/// later steps untouched. Start, completion, and failure notifications for
/// every step go through `reporter`, plus a final confirmation on overall
/// success.
pub fn run_setup<F: SourceFetcher, V: Vcs>(
    paths: &SetupPaths,
    config: &SetupConfig,
    fetcher: &F,
    vcs: &V,
    reporter: &dyn Reporter,
) -> Result<()> {
    let steps: Vec<Step<'_>> = vec![
        Step {
            name: "Download Chromium",
            run: Box::new(|| acquire_source(paths, fetcher, reporter)),
        },
        Step {
            name: "Checkout Version",
            run: Box::new(|| select_version(paths, config, vcs, reporter).map(|_| ())),
        },
        Step {
            name: "Apply Patches",
            run: Box::new(|| apply_patches(paths, vcs, reporter).map(|_| ())),
        },
        Step {
            name: "Validate Setup",
            run: Box::new(|| validate_setup(paths, reporter)),
        },
    ];

    for step in steps {
        reporter.info(&format!("Starting step: {}", step.name));
        match (step.run)() {
            Ok(()) => reporter.success(&format!("Completed step: {}", step.name)),
            Err(err) => {
                reporter.error(&format!("Step failed: {}\n{err:#}", step.name));
                return Err(err.context(format!("step '{}' failed", step.name)));
            }
        }
    }

    reporter.success("Chromium browser setup completed successfully!");
    Ok(())
}
