//! Object operations: put, get, head, delete.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::body::ObjectBody;
use crate::error::{S3ServiceError, S3ServiceResult};
use crate::model::{
    GetObjectInput, GetObjectOutput, HeadObjectOutput, PutObjectInput, PutObjectOutput,
};
use crate::provider::MockS3;
use crate::state::object::STANDARD_STORAGE_CLASS;
use crate::state::{ObjectMetadata, Owner, S3Object};
use crate::storage::StoredBody;
use crate::validation::validate_object_key;

#[allow(clippy::unused_async)]
impl MockS3 {
    /// Store an object, replacing any object under the same key.
    pub(crate) async fn handle_put_object(
        &self,
        input: PutObjectInput,
    ) -> S3ServiceResult<PutObjectOutput> {
        self.ensure_open()?;
        let PutObjectInput {
            bucket,
            key,
            body,
            content_type,
            metadata,
        } = input;

        validate_object_key(&key)?;
        if !self.state.bucket_exists(&bucket) {
            return Err(S3ServiceError::NoSuchBucket { bucket });
        }

        let staged = self.storage.stage(body).await?;
        let e_tag = staged.etag().to_owned();
        let size = staged.size();

        let object = S3Object {
            key: key.clone(),
            etag: e_tag.clone(),
            size,
            last_modified: Utc::now(),
            storage_class: STANDARD_STORAGE_CLASS.to_owned(),
            metadata: ObjectMetadata {
                content_type,
                user_metadata: metadata,
            },
            owner: Owner::default(),
        };

        {
            // A staged body dropped here (bucket gone meanwhile) takes its spill file with it.
            let bucket_ref = self.state.get_bucket(&bucket)?;
            let mut objects = bucket_ref.objects.write();
            // Body and descriptor change together under the bucket's key lock.
            self.storage.insert(&bucket, &key, staged);
            objects.put(object);
        }

        debug!(bucket = %bucket, key = %key, size, "put_object completed");
        Ok(PutObjectOutput { e_tag, size })
    }

    /// Fetch an object with a one-shot body.
    pub(crate) async fn handle_get_object(
        &self,
        input: GetObjectInput,
    ) -> S3ServiceResult<GetObjectOutput> {
        self.ensure_open()?;
        let (object, body) = self.lookup_object_with_body(&input.bucket, &input.key)?;
        let data = body.read(input.range).await?;

        let content_range = input.range.map(|(start, _)| {
            let end = start + data.len() as u64 - 1;
            format!("bytes {start}-{end}/{}", object.size)
        });

        debug!(bucket = %input.bucket, key = %input.key, len = data.len(), "get_object completed");
        Ok(GetObjectOutput {
            content_length: data.len() as u64,
            body: ObjectBody::from(data),
            content_range,
            content_type: object.metadata.content_type_or_default().to_owned(),
            e_tag: object.etag,
            last_modified: object.last_modified,
            metadata: object.metadata.user_metadata,
        })
    }

    /// Fetch an object's metadata without its body.
    pub(crate) async fn handle_head_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> S3ServiceResult<HeadObjectOutput> {
        self.ensure_open()?;
        let object = self.lookup_object(bucket, key)?;
        Ok(HeadObjectOutput {
            content_length: object.size,
            content_type: object.metadata.content_type_or_default().to_owned(),
            e_tag: object.etag,
            last_modified: object.last_modified,
            metadata: object.metadata.user_metadata,
            storage_class: object.storage_class,
        })
    }

    /// Delete an object. Deleting a missing key succeeds, as in S3.
    pub(crate) async fn handle_delete_object(&self, bucket: &str, key: &str) -> S3ServiceResult<()> {
        self.ensure_open()?;
        let removed = {
            let bucket_ref = self.state.get_bucket(bucket)?;
            let mut objects = bucket_ref.objects.write();
            self.storage.delete_object(bucket, key);
            objects.delete(key)
        };
        debug!(bucket, key, existed = removed.is_some(), "delete_object completed");
        Ok(())
    }

    /// Clone an object descriptor out of its bucket.
    fn lookup_object(&self, bucket: &str, key: &str) -> S3ServiceResult<S3Object> {
        let bucket_ref = self.state.get_bucket(bucket)?;
        let objects = bucket_ref.objects.read();
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| S3ServiceError::NoSuchKey {
                key: key.to_owned(),
            })
    }

    /// Descriptor and body handle of one write, taken under the same read lock.
    fn lookup_object_with_body(
        &self,
        bucket: &str,
        key: &str,
    ) -> S3ServiceResult<(S3Object, Arc<StoredBody>)> {
        let bucket_ref = self.state.get_bucket(bucket)?;
        let objects = bucket_ref.objects.read();
        let object = objects
            .get(key)
            .cloned()
            .ok_or_else(|| S3ServiceError::NoSuchKey {
                key: key.to_owned(),
            })?;
        let body = self.storage.get(bucket, key).ok_or_else(|| {
            S3ServiceError::Internal(anyhow::anyhow!("no body stored for {bucket}/{key}"))
        })?;
        Ok((object, body))
    }
}
