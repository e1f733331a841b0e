//! The mocked S3 backend.
//!
//! [`MockS3`] owns all state of one mocked session: bucket metadata, object
//! bodies, and configuration. Individual operations live in the
//! [`crate::ops`] submodules as `handle_*` methods.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::config::S3Config;
use crate::error::{S3ServiceError, S3ServiceResult};
use crate::state::S3ServiceState;
use crate::storage::InMemoryStorage;

/// In-memory S3 backend for one session.
///
/// # Examples
///
/// ```
/// use mockstack_s3::MockS3;
/// use mockstack_s3::config::S3Config;
///
/// let backend = MockS3::new(S3Config::default());
/// assert!(backend.is_open());
/// assert!(backend.state().list_buckets().is_empty());
/// ```
#[derive(Debug)]
pub struct MockS3 {
    pub(crate) state: Arc<S3ServiceState>,
    pub(crate) storage: Arc<InMemoryStorage>,
    pub(crate) config: Arc<S3Config>,
    closed: AtomicBool,
}

impl MockS3 {
    /// Create an empty backend.
    #[must_use]
    pub fn new(config: S3Config) -> Self {
        let storage = InMemoryStorage::new(config.max_memory_object_size);
        Self {
            state: Arc::new(S3ServiceState::new()),
            storage: Arc::new(storage),
            config: Arc::new(config),
            closed: AtomicBool::new(false),
        }
    }

    /// Bucket and object metadata.
    #[must_use]
    pub fn state(&self) -> &S3ServiceState {
        &self.state
    }

    /// Object body storage.
    #[must_use]
    pub fn storage(&self) -> &InMemoryStorage {
        &self.storage
    }

    /// Backend configuration.
    #[must_use]
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Whether the backend still accepts requests.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.closed.load(Ordering::Acquire)
    }

    /// Drop every bucket and body but keep accepting requests.
    pub fn reset(&self) {
        self.state.reset();
        self.storage.reset();
    }

    /// Discard all state and refuse further requests. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            let buckets = self.state.list_buckets().len();
            self.reset();
            info!(buckets_discarded = buckets, "mocked S3 backend closed");
        }
    }

    /// Fail with [`S3ServiceError::SessionClosed`] once closed.
    pub(crate) fn ensure_open(&self) -> S3ServiceResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(S3ServiceError::SessionClosed)
        }
    }
}
