//! Batch provisioning of routing extensions on a telephony-management API.
//!
//! A run logs in with the batch account, downloads the pending-records file,
//! provisions each record under the record's own session, and finally deletes
//! the source file.

pub mod config;
pub mod engine;
pub mod network;
pub mod ops;

pub use config::{Config, ConfigError};
pub use engine::{exit_code, run_batch, BatchError, BatchReport};
