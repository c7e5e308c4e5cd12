// Story validator CLI library

// Enforce panic-free code in production
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![cfg_attr(not(test), warn(clippy::expect_used))]
#![cfg_attr(not(test), warn(clippy::panic))]
// Test-specific allows
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod rpc;

pub use actions::{Action, ActionTable};
pub use error::CliError;
pub use rpc::{NodeStatus, RpcClient};
