//! Common test infrastructure
//!
//! Builds throwaway workspaces holding a schedule, the templates and the
//! output location, so tests can drive a full run.

mod fixtures;

pub use fixtures::{TestWorkspace, TEST_SCHEDULE};
