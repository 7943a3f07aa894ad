//! Convenient re-exports for harness tests.
//!
//! ```rust,ignore
//! use devnet_harness::prelude::*;
//! ```

pub use crate::chain::ChainClient;
pub use crate::command::{CommandOutput, CommandRunner, Shell};
pub use crate::config::{init_logging, ChainOperation, FeeSchedule, HarnessConfig};
pub use crate::error::HarnessError;
pub use crate::lifecycle::NodeStack;
pub use crate::mock::MockRunner;
pub use crate::utils::{await_finalization, format_amount, random_string};

// Re-exported so examples can share config without importing std paths
pub use std::sync::Arc;
