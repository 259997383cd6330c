//! Side-effecting adapters: subprocess execution, git, and source fetch.
//!
//! Each external tool sits behind a trait so orchestration code can be tested
//! with fakes that never spawn processes.

pub mod fetch;
pub mod git;
pub mod process;
