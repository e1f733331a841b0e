//! Bucket and object metadata for a mocked S3 session.
//!
//! - [`S3ServiceState`] -- every bucket in the session
//! - [`S3Bucket`] -- one bucket and its key store
//! - [`KeyStore`] -- sorted key to object map with listing
//! - [`S3Object`] / [`ObjectMetadata`] / [`Owner`] -- object records
//!
//! Object bodies live separately in [`crate::storage::InMemoryStorage`].

pub(crate) mod bucket;
pub(crate) mod keystore;
pub(crate) mod object;
pub(crate) mod service;

pub use bucket::S3Bucket;
pub use keystore::{KeyStore, ListResult};
pub use object::{DEFAULT_CONTENT_TYPE, ObjectMetadata, Owner, S3Object, STANDARD_STORAGE_CLASS};
pub use service::S3ServiceState;
