//! Storage helpers.

use bytes::Bytes;
use mockstack_s3::S3ServiceResult;
use mockstack_s3::client::ObjectStorage;
use mockstack_s3::model::{CreateBucketInput, PutObjectInput};
use tracing::debug;

/// Name of the bucket [`create_test_bucket`] creates.
pub const TEST_BUCKET: &str = "test_bucket";

/// Store `data` under `key` in `bucket`, overwriting any existing object.
///
/// Errors from the client, such as a missing bucket, are returned as-is.
pub async fn upload(
    client: &(impl ObjectStorage + ?Sized),
    data: impl Into<Bytes>,
    bucket: &str,
    key: &str,
) -> S3ServiceResult<()> {
    let output = client
        .put_object(PutObjectInput::new(bucket, key, data))
        .await?;
    debug!(bucket, key, etag = %output.e_tag, size = output.size, "uploaded");
    Ok(())
}

/// Create [`TEST_BUCKET`] through `client` and return its name.
pub async fn create_test_bucket(client: &(impl ObjectStorage + ?Sized)) -> S3ServiceResult<String> {
    client
        .create_bucket(CreateBucketInput::new(TEST_BUCKET))
        .await?;
    Ok(TEST_BUCKET.to_owned())
}
