//! Operation handlers for [`crate::provider::MockS3`].
//!
//! Each submodule adds `handle_*` methods for one category of operations.
//! [`crate::client::MockS3Client`] exposes them through
//! [`crate::client::ObjectStorage`].

pub mod bucket;
pub mod list;
pub mod object;
