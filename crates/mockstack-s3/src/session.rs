//! Mocked S3 sessions.
//!
//! A [`MockSession`] owns one fresh [`MockS3`] backend. Everything created
//! through its clients lives until the session ends, either by an explicit
//! [`MockSession::stop`] or by the session being dropped. There is no global
//! session: code under test only reaches the mock through a client it was
//! handed.
//!
//! ```
//! use mockstack_s3::MockSession;
//! use mockstack_s3::client::ObjectStorage;
//! use mockstack_s3::model::CreateBucketInput;
//!
//! # tokio_test::block_on(async {
//! let session = MockSession::start();
//! let client = session.client();
//! client.create_bucket(CreateBucketInput::new("scratch")).await.unwrap();
//! session.stop();
//!
//! assert!(client.list_buckets().await.is_err());
//! # });
//! ```

use std::future::Future;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::client::MockS3Client;
use crate::config::S3Config;
use crate::provider::MockS3;

/// A live mocked S3 session.
#[derive(Debug)]
pub struct MockSession {
    id: Uuid,
    backend: Arc<MockS3>,
}

impl MockSession {
    /// Start a session with the default configuration.
    #[must_use]
    pub fn start() -> Self {
        Self::start_with(S3Config::default())
    }

    /// Start a session with `config`.
    #[must_use]
    pub fn start_with(config: S3Config) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, region = %config.default_region, "mocked S3 session started");
        Self {
            id,
            backend: Arc::new(MockS3::new(config)),
        }
    }

    /// Unique identifier of this session, as it appears in logs.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// A client bound to this session.
    #[must_use]
    pub fn client(&self) -> MockS3Client {
        MockS3Client::new(Arc::clone(&self.backend))
    }

    /// Whether the session still accepts requests.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.backend.is_open()
    }

    /// End the session, discarding all buckets and objects.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.backend.close();
        info!(session = %self.id, "mocked S3 session ended");
    }
}

/// Run `f` against a fresh session and end the session afterwards.
///
/// The session ends even if `f` panics, so no state leaks into later tests.
///
/// ```
/// use mockstack_s3::client::ObjectStorage;
/// use mockstack_s3::mock_s3;
/// use mockstack_s3::model::CreateBucketInput;
///
/// # tokio_test::block_on(async {
/// let buckets = mock_s3(|client| async move {
///     client.create_bucket(CreateBucketInput::new("inside")).await.unwrap();
///     client.list_buckets().await.unwrap().buckets.len()
/// })
/// .await;
/// assert_eq!(buckets, 1);
/// # });
/// ```
pub async fn mock_s3<F, Fut, T>(f: F) -> T
where
    F: FnOnce(MockS3Client) -> Fut,
    Fut: Future<Output = T>,
{
    mock_s3_with(S3Config::default(), f).await
}

/// [`mock_s3`] with an explicit configuration.
pub async fn mock_s3_with<F, Fut, T>(config: S3Config, f: F) -> T
where
    F: FnOnce(MockS3Client) -> Fut,
    Fut: Future<Output = T>,
{
    let session = MockSession::start_with(config);
    let output = f(session.client()).await;
    session.stop();
    output
}
