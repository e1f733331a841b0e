//! Bucket operations: create, head, list, delete.

use tracing::debug;

use crate::error::S3ServiceResult;
use crate::model::{
    BucketSummary, CreateBucketInput, CreateBucketOutput, HeadBucketOutput, ListBucketsOutput,
};
use crate::provider::MockS3;
use crate::state::Owner;
use crate::validation::validate_bucket_name;

// Async to keep one calling convention across handlers, even for the ones
// that never touch body storage.
#[allow(clippy::unused_async)]
impl MockS3 {
    /// Create a bucket.
    pub(crate) async fn handle_create_bucket(
        &self,
        input: CreateBucketInput,
    ) -> S3ServiceResult<CreateBucketOutput> {
        self.ensure_open()?;
        let bucket_name = input.bucket;
        validate_bucket_name(&bucket_name, self.config.strict_bucket_names)?;

        let region = input
            .location_constraint
            .filter(|lc| !lc.is_empty())
            .unwrap_or_else(|| self.config.default_region.clone());

        self.state
            .create_bucket(bucket_name.clone(), region, Owner::default())?;

        debug!(bucket = %bucket_name, "create_bucket completed");
        Ok(CreateBucketOutput {
            location: format!("/{bucket_name}"),
        })
    }

    /// Check that a bucket exists.
    pub(crate) async fn handle_head_bucket(&self, bucket: &str) -> S3ServiceResult<HeadBucketOutput> {
        self.ensure_open()?;
        let bucket = self.state.get_bucket(bucket)?;
        Ok(HeadBucketOutput {
            bucket_region: bucket.region.clone(),
        })
    }

    /// List every bucket in the session.
    pub(crate) async fn handle_list_buckets(&self) -> S3ServiceResult<ListBucketsOutput> {
        self.ensure_open()?;
        let buckets = self
            .state
            .list_buckets()
            .into_iter()
            .map(|(name, creation_date, bucket_region)| BucketSummary {
                name,
                creation_date,
                bucket_region,
            })
            .collect();
        Ok(ListBucketsOutput {
            buckets,
            owner: Owner::default(),
        })
    }

    /// Delete an empty bucket.
    pub(crate) async fn handle_delete_bucket(&self, bucket: &str) -> S3ServiceResult<()> {
        self.ensure_open()?;
        self.state.delete_bucket(bucket)?;
        self.storage.delete_bucket_data(bucket);
        debug!(bucket, "delete_bucket completed");
        Ok(())
    }
}
