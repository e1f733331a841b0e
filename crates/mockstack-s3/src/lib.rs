//! Session-scoped, in-memory S3 for tests.
//!
//! Start a [`MockSession`], hand its [`MockS3Client`] to the code under test,
//! and everything that code creates disappears when the session ends.
//!
//! # Architecture
//!
//! ```text
//!  code under test
//!        |  &dyn ObjectStorage
//!        v
//!  MockS3Client ---- owned by ----> MockSession (start / stop / Drop)
//!        |
//!        v
//!  MockS3 (ops::* handlers)
//!     |               |
//!     v               v
//!  S3ServiceState   InMemoryStorage
//!  (buckets, keys)  (bodies, spill files)
//! ```

pub mod body;
pub mod checksums;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
mod ops;
pub mod provider;
pub mod session;
pub mod state;
pub mod storage;
pub mod utils;
pub mod validation;

pub use body::ObjectBody;
pub use client::{MockS3Client, ObjectStorage};
pub use config::S3Config;
pub use error::{S3ServiceError, S3ServiceResult};
pub use provider::MockS3;
pub use session::{MockSession, mock_s3, mock_s3_with};
