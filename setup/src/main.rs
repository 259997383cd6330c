//! `setup` binary: fetch, update, and patch the Chromium source tree.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use setup::acquire::acquire_source;
use setup::config::{SetupPaths, load_config};
use setup::exit_codes;
use setup::io::fetch::DepotTools;
use setup::io::git::GitCli;
use setup::logging;
use setup::patch::apply_patches;
use setup::pipeline::run_setup;
use setup::report::{ConsoleReporter, Reporter};
use setup::validate::validate_setup;
use setup::version::select_version;

#[derive(Parser)]
#[command(
    name = "setup",
    version,
    about = "Fetch, update, and patch the Chromium source tree"
)]
struct Cli {
    /// Workspace root containing `src/` and `patches/` (defaults to the
    /// current directory).
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: fetch, checkout, apply patches, validate.
    Run,
    /// Fetch the Chromium source tree if it is missing.
    Fetch,
    /// Advance the source tree to the configured branch tip.
    Checkout,
    /// Apply `patches/*.patch` onto the source tree in sorted order.
    Apply,
    /// Check that the source tree exists and is a git working copy.
    Validate,
}

fn main() {
    logging::init();
    let reporter = ConsoleReporter;
    if let Err(err) = run(&reporter) {
        reporter.error(&format!("Setup failed: {err:#}"));
        std::process::exit(exit_codes::FAILED);
    }
}

fn run(reporter: &dyn Reporter) -> Result<()> {
    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let paths = SetupPaths::new(root);
    let config = load_config(&paths.root)?;
    let fetcher = DepotTools::new(&config.fetch);
    let vcs = GitCli::new(&paths.source_dir);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run_setup(&paths, &config, &fetcher, &vcs, reporter),
        Command::Fetch => acquire_source(&paths, &fetcher, reporter),
        Command::Checkout => select_version(&paths, &config, &vcs, reporter).map(|_| ()),
        Command::Apply => apply_patches(&paths, &vcs, reporter).map(|_| ()),
        Command::Validate => validate_setup(&paths, reporter),
    }
}
