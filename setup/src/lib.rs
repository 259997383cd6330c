//! Chromium source setup pipeline.
//!
//! Prepares a patched Chromium checkout in four fail-fast steps: fetch the
//! source tree, advance it to the remote branch tip, apply local patches in
//! sorted order, and validate the result. The architecture enforces a strict
//! separation:
//!
//! - **[`io`]**: Side-effecting adapters (subprocess execution, git,
//!   depot_tools fetch). Behind traits so tests can substitute fakes.
//! - Step modules ([`acquire`], [`version`], [`patch`], [`validate`]) and the
//!   [`pipeline`] orchestrator coordinate the adapters into CLI commands.
//!
//! Every step takes its paths and configuration explicitly; nothing reads
//! ambient working-directory state after process entry.

pub mod acquire;
pub mod config;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod patch;
pub mod pipeline;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;
pub mod version;
