//! Core types, configuration, and errors for MockStack.
//!
//! This crate holds the small set of building blocks shared by the mocked
//! service crates: AWS account and region identifiers, process-level
//! configuration, and the core error type.

mod config;
mod error;
mod types;

pub use config::MockStackConfig;
pub use error::{MockStackError, MockStackResult};
pub use types::{AccountId, AwsRegion};
