//! `ListObjectsV2`.

use tracing::debug;

use crate::error::{S3ServiceError, S3ServiceResult};
use crate::model::{DEFAULT_MAX_KEYS, ListObjectsV2Input, ListObjectsV2Output, ObjectSummary};
use crate::provider::MockS3;
use crate::utils::{decode_continuation_token, encode_continuation_token};

#[allow(clippy::unused_async)]
impl MockS3 {
    /// List a page of objects in a bucket.
    ///
    /// A continuation token takes precedence over `start_after`.
    pub(crate) async fn handle_list_objects_v2(
        &self,
        input: ListObjectsV2Input,
    ) -> S3ServiceResult<ListObjectsV2Output> {
        self.ensure_open()?;

        let max_keys = input.max_keys.unwrap_or(DEFAULT_MAX_KEYS);
        let prefix = input.prefix.as_deref().unwrap_or_default();
        let delimiter = input.delimiter.as_deref().unwrap_or_default();
        let start_after = match input.continuation_token.as_deref() {
            Some(token) => decode_continuation_token(token)?,
            None => input.start_after.clone().unwrap_or_default(),
        };

        let listing = {
            let bucket = self.state.get_bucket(&input.bucket)?;
            let objects = bucket.objects.read();
            objects.list_objects(prefix, delimiter, &start_after, max_keys)
        };

        let contents: Vec<ObjectSummary> = listing
            .objects
            .into_iter()
            .map(|obj| ObjectSummary {
                key: obj.key,
                size: obj.size,
                e_tag: obj.etag,
                last_modified: obj.last_modified,
                storage_class: obj.storage_class,
            })
            .collect();
        let key_count = contents.len() + listing.common_prefixes.len();

        let next_continuation_token = match (listing.is_truncated, listing.next_marker) {
            (true, Some(marker)) => Some(encode_continuation_token(&marker)),
            (true, None) => {
                return Err(S3ServiceError::Internal(anyhow::anyhow!(
                    "truncated listing of {} without a marker",
                    input.bucket
                )));
            }
            (false, _) => None,
        };

        debug!(
            bucket = %input.bucket,
            key_count,
            is_truncated = listing.is_truncated,
            "list_objects_v2 completed"
        );

        Ok(ListObjectsV2Output {
            name: input.bucket,
            prefix: input.prefix,
            delimiter: input.delimiter,
            max_keys,
            key_count,
            is_truncated: listing.is_truncated,
            contents,
            common_prefixes: listing.common_prefixes,
            continuation_token: input.continuation_token,
            next_continuation_token,
            start_after: input.start_after,
        })
    }
}
