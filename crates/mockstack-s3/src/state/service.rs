//! All buckets of one mocked session.
//!
//! [`S3ServiceState`] enforces bucket-name uniqueness. Access is concurrent
//! through `DashMap`; no external locking is required.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::Ref;
use tracing::{debug, info};

use crate::error::S3ServiceError;

use super::bucket::S3Bucket;
use super::object::Owner;

/// Bucket table for one session.
pub struct S3ServiceState {
    buckets: DashMap<String, S3Bucket>,
}

impl std::fmt::Debug for S3ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ServiceState")
            .field("bucket_count", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl Default for S3ServiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl S3ServiceState {
    /// Create a new, empty service state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    /// Create a new bucket.
    ///
    /// A session has a single account, so a taken name is always reported as
    /// already owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::BucketAlreadyOwnedByYou`] if the name is taken.
    pub fn create_bucket(
        &self,
        name: String,
        region: String,
        owner: Owner,
    ) -> Result<(), S3ServiceError> {
        match self.buckets.entry(name.clone()) {
            Entry::Occupied(_) => Err(S3ServiceError::BucketAlreadyOwnedByYou { bucket: name }),
            Entry::Vacant(slot) => {
                slot.insert(S3Bucket::new(name.clone(), region, owner));
                info!(bucket = %name, "bucket created");
                Ok(())
            }
        }
    }

    /// Delete an empty bucket.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    /// - [`S3ServiceError::BucketNotEmpty`] if it still holds objects.
    pub fn delete_bucket(&self, name: &str) -> Result<(), S3ServiceError> {
        let removed = self.buckets.remove_if(name, |_, bucket| bucket.is_empty());
        if removed.is_some() {
            info!(bucket = %name, "bucket deleted");
            return Ok(());
        }

        if self.buckets.contains_key(name) {
            Err(S3ServiceError::BucketNotEmpty {
                bucket: name.to_owned(),
            })
        } else {
            Err(S3ServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })
        }
    }

    /// Get a reference to a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    pub fn get_bucket(&self, name: &str) -> Result<Ref<'_, String, S3Bucket>, S3ServiceError> {
        self.buckets
            .get(name)
            .ok_or_else(|| S3ServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })
    }

    /// List `(name, creation_date, region)` for every bucket, sorted by name.
    #[must_use]
    pub fn list_buckets(&self) -> Vec<(String, DateTime<Utc>, String)> {
        let mut buckets: Vec<_> = self
            .buckets
            .iter()
            .map(|entry| {
                let bucket = entry.value();
                (
                    entry.key().clone(),
                    bucket.creation_date,
                    bucket.region.clone(),
                )
            })
            .collect();
        buckets.sort_by(|a, b| a.0.cmp(&b.0));
        buckets
    }

    /// Check whether a bucket exists.
    #[must_use]
    pub fn bucket_exists(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    /// Remove every bucket.
    pub fn reset(&self) {
        debug!(buckets = self.buckets.len(), "discarding all bucket state");
        self.buckets.clear();
    }
}
