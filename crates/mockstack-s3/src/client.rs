//! The storage capability set consumed by code under test.
//!
//! [`ObjectStorage`] is the seam between application helpers and whatever
//! answers their storage calls. Helpers take the client explicitly, so a test
//! decides which backend they talk to by what it passes in.
//!
//! The trait uses `#[async_trait]` so it stays object-safe and can be passed
//! around as `&dyn ObjectStorage`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::S3ServiceResult;
use crate::model::{
    CreateBucketInput, CreateBucketOutput, GetObjectInput, GetObjectOutput, HeadBucketOutput,
    HeadObjectOutput, ListBucketsOutput, ListObjectsV2Input, ListObjectsV2Output, PutObjectInput,
    PutObjectOutput,
};
use crate::provider::MockS3;

/// Object storage operations, shaped after the S3 API.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Create a bucket.
    async fn create_bucket(&self, input: CreateBucketInput) -> S3ServiceResult<CreateBucketOutput>;

    /// Check that a bucket exists.
    async fn head_bucket(&self, bucket: &str) -> S3ServiceResult<HeadBucketOutput>;

    /// List every bucket.
    async fn list_buckets(&self) -> S3ServiceResult<ListBucketsOutput>;

    /// Delete an empty bucket.
    async fn delete_bucket(&self, bucket: &str) -> S3ServiceResult<()>;

    /// Create or overwrite an object.
    async fn put_object(&self, input: PutObjectInput) -> S3ServiceResult<PutObjectOutput>;

    /// Fetch an object and its body.
    async fn get_object(&self, input: GetObjectInput) -> S3ServiceResult<GetObjectOutput>;

    /// Fetch an object's metadata.
    async fn head_object(&self, bucket: &str, key: &str) -> S3ServiceResult<HeadObjectOutput>;

    /// Delete an object.
    async fn delete_object(&self, bucket: &str, key: &str) -> S3ServiceResult<()>;

    /// List a page of a bucket's objects.
    async fn list_objects_v2(
        &self,
        input: ListObjectsV2Input,
    ) -> S3ServiceResult<ListObjectsV2Output>;
}

/// Client bound to one mocked session.
///
/// Cheap to clone; all clones share the session. Once the session ends every
/// call returns [`S3ServiceError::SessionClosed`](crate::error::S3ServiceError::SessionClosed).
#[derive(Debug, Clone)]
pub struct MockS3Client {
    backend: Arc<MockS3>,
}

impl MockS3Client {
    pub(crate) fn new(backend: Arc<MockS3>) -> Self {
        Self { backend }
    }

    /// The backend this client talks to, for state inspection in tests.
    #[must_use]
    pub fn backend(&self) -> &MockS3 {
        &self.backend
    }
}

#[async_trait]
impl ObjectStorage for MockS3Client {
    async fn create_bucket(&self, input: CreateBucketInput) -> S3ServiceResult<CreateBucketOutput> {
        self.backend.handle_create_bucket(input).await
    }

    async fn head_bucket(&self, bucket: &str) -> S3ServiceResult<HeadBucketOutput> {
        self.backend.handle_head_bucket(bucket).await
    }

    async fn list_buckets(&self) -> S3ServiceResult<ListBucketsOutput> {
        self.backend.handle_list_buckets().await
    }

    async fn delete_bucket(&self, bucket: &str) -> S3ServiceResult<()> {
        self.backend.handle_delete_bucket(bucket).await
    }

    async fn put_object(&self, input: PutObjectInput) -> S3ServiceResult<PutObjectOutput> {
        self.backend.handle_put_object(input).await
    }

    async fn get_object(&self, input: GetObjectInput) -> S3ServiceResult<GetObjectOutput> {
        self.backend.handle_get_object(input).await
    }

    async fn head_object(&self, bucket: &str, key: &str) -> S3ServiceResult<HeadObjectOutput> {
        self.backend.handle_head_object(bucket, key).await
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> S3ServiceResult<()> {
        self.backend.handle_delete_object(bucket, key).await
    }

    async fn list_objects_v2(
        &self,
        input: ListObjectsV2Input,
    ) -> S3ServiceResult<ListObjectsV2Output> {
        self.backend.handle_list_objects_v2(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::S3Config;

    fn client() -> MockS3Client {
        MockS3Client::new(Arc::new(MockS3::new(S3Config::default())))
    }

    #[tokio::test]
    async fn test_should_share_state_between_clones() {
        let a = client();
        let b = a.clone();
        a.create_bucket(CreateBucketInput::new("shared"))
            .await
            .unwrap_or_else(|e| panic!("create failed: {e}"));

        let listed = b
            .list_buckets()
            .await
            .unwrap_or_else(|e| panic!("list failed: {e}"));
        assert_eq!(listed.buckets.len(), 1);
        assert_eq!(listed.buckets[0].name, "shared");
    }

    #[tokio::test]
    async fn test_should_work_as_trait_object() {
        let client = client();
        let storage: &dyn ObjectStorage = &client;
        storage
            .create_bucket(CreateBucketInput::new("dyn-bucket"))
            .await
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        storage
            .put_object(PutObjectInput::new("dyn-bucket", "k", "v"))
            .await
            .unwrap_or_else(|e| panic!("put failed: {e}"));
        let head = storage
            .head_object("dyn-bucket", "k")
            .await
            .unwrap_or_else(|e| panic!("head failed: {e}"));
        assert_eq!(head.content_length, 1);
    }
}
