//! Per-bucket state.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::keystore::KeyStore;
use super::object::Owner;

/// A bucket in a mocked session.
///
/// The key store sits behind a `parking_lot::RwLock` so readers never block
/// each other.
pub struct S3Bucket {
    /// Bucket name.
    pub name: String,
    /// Region the bucket was created in.
    pub region: String,
    /// When the bucket was created.
    pub creation_date: DateTime<Utc>,
    /// The bucket owner.
    pub owner: Owner,
    /// Object descriptors keyed by object key.
    pub objects: RwLock<KeyStore>,
}

impl std::fmt::Debug for S3Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Bucket")
            .field("name", &self.name)
            .field("region", &self.region)
            .field("creation_date", &self.creation_date)
            .field("object_count", &self.objects.read().len())
            .finish_non_exhaustive()
    }
}

impl S3Bucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new(name: String, region: String, owner: Owner) -> Self {
        Self {
            name,
            region,
            creation_date: Utc::now(),
            owner,
            objects: RwLock::new(KeyStore::default()),
        }
    }

    /// Whether the bucket holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}
