//! # Devnet Harness
//!
//! Utilities for driving an external chain node / wallet daemon pair from
//! integration tests: one-shot process lifecycle, shell command execution
//! with bounded output capture, chain state queries over HTTP and contract
//! deployment through the external CLI.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use devnet_harness::prelude::*;
//!
//! #[tokio::test]
//! async fn deploys_the_system_contract() {
//!     let config = Arc::new(HarnessConfig::default());
//!     init_logging(&config);
//!
//!     let stack = NodeStack::new();
//!     stack.startup().await.unwrap();
//!
//!     let chain = ChainClient::new(config.clone());
//!     chain
//!         .set_contract(
//!             &config.system_account,
//!             "contracts/fio.system",
//!             "fio.system.wasm",
//!             "fio.system.abi",
//!         )
//!         .await
//!         .unwrap();
//!
//!     await_finalization(&config).await;
//!     let account = chain.get_account(&config.system_account).await.unwrap();
//!     assert!(account.get("account_name").is_some());
//!
//!     stack.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## Design notes
//!
//! - Configuration is immutable and shared by reference; there are no
//!   process-wide globals.
//! - Every failure is a typed [`HarnessError`]; nothing retries.
//! - No operation enforces a timeout; wrap calls in `tokio::time::timeout`
//!   when a bound is needed.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Immutable settings, fee schedule and crate-wide constants
pub mod config;

/// Failure kinds surfaced by every public operation
pub mod error;

// Precondition checks shared by the public operations
pub mod validate;

// Bounded-capture command execution
pub mod command;

// Scripted runner for tests
pub mod mock;

// One-shot lifecycle of the node / wallet pair
pub mod lifecycle;

// HTTP chain queries and CLI contract deployment
pub mod chain;

// Finalization wait, random names, amount formatting
pub mod utils;

// Convenient re-exports for common usage
pub mod prelude;

// Re-export commonly used types at crate root
pub use chain::ChainClient;
pub use command::{CommandOutput, CommandRunner, Shell};
pub use config::{init_logging, ChainOperation, FeeSchedule, HarnessConfig};
pub use error::HarnessError;
pub use lifecycle::NodeStack;
pub use mock::MockRunner;

/// Harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
