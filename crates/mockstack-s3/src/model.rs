//! Request and response shapes for the mocked S3 operations.
//!
//! Field names follow the S3 API so test code reads like code written against
//! a real SDK client.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::body::ObjectBody;
use crate::state::Owner;

/// Default page size for `ListObjectsV2`.
pub const DEFAULT_MAX_KEYS: usize = 1000;

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// S3 CreateBucketInput.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketInput {
    /// Name of the bucket to create.
    pub bucket: String,
    /// Region for the bucket; the configured default when absent.
    pub location_constraint: Option<String>,
}

impl CreateBucketInput {
    /// Input for a bucket in the default region.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            location_constraint: None,
        }
    }
}

/// S3 CreateBucketOutput.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    /// `/{bucket}`.
    pub location: String,
}

/// S3 HeadBucketOutput.
#[derive(Debug, Clone, Default)]
pub struct HeadBucketOutput {
    /// Region the bucket was created in.
    pub bucket_region: String,
}

/// One entry of a `ListBuckets` response.
#[derive(Debug, Clone)]
pub struct BucketSummary {
    /// Bucket name.
    pub name: String,
    /// When the bucket was created.
    pub creation_date: DateTime<Utc>,
    /// Region the bucket was created in.
    pub bucket_region: String,
}

/// S3 ListBucketsOutput.
#[derive(Debug, Clone, Default)]
pub struct ListBucketsOutput {
    /// Every bucket of the session, sorted by name.
    pub buckets: Vec<BucketSummary>,
    /// Owner of the listed buckets.
    pub owner: Owner,
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

/// S3 PutObjectInput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectInput {
    /// Target bucket.
    pub bucket: String,
    /// Object key, 1 to 1024 bytes.
    pub key: String,
    /// Object contents.
    pub body: Bytes,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP prefix headers: `x-amz-meta-`.
    pub metadata: HashMap<String, String>,
}

impl PutObjectInput {
    /// Input carrying only the addressed body.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            body: body.into(),
            ..Self::default()
        }
    }
}

/// S3 PutObjectOutput.
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    /// Quoted hex MD5 of the stored body.
    pub e_tag: String,
    /// Stored body size in bytes.
    pub size: u64,
}

/// S3 GetObjectInput.
#[derive(Debug, Clone, Default)]
pub struct GetObjectInput {
    /// Bucket holding the object.
    pub bucket: String,
    /// Object key.
    pub key: String,
    /// Inclusive byte range `(first, last)`.
    pub range: Option<(u64, u64)>,
}

impl GetObjectInput {
    /// Input for the whole object.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            range: None,
        }
    }
}

/// S3 GetObjectOutput.
#[derive(Debug)]
pub struct GetObjectOutput {
    /// One-shot body stream.
    pub body: ObjectBody,
    /// Length of `body`, which is the range length for ranged reads.
    pub content_length: u64,
    /// `bytes first-last/total` for ranged reads.
    pub content_range: Option<String>,
    /// Content type given at upload, or `binary/octet-stream`.
    pub content_type: String,
    /// Quoted hex MD5 of the whole object.
    pub e_tag: String,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// User metadata given at upload.
    pub metadata: HashMap<String, String>,
}

/// S3 HeadObjectOutput.
#[derive(Debug, Clone)]
pub struct HeadObjectOutput {
    /// Object size in bytes.
    pub content_length: u64,
    /// Content type given at upload, or `binary/octet-stream`.
    pub content_type: String,
    /// Quoted hex MD5 of the object.
    pub e_tag: String,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// User metadata given at upload.
    pub metadata: HashMap<String, String>,
    /// Always `STANDARD`.
    pub storage_class: String,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// S3 ListObjectsV2Input.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Input {
    /// Bucket to list.
    pub bucket: String,
    /// Only list keys starting with this prefix.
    pub prefix: Option<String>,
    /// Roll keys up to the next occurrence of this string into common prefixes.
    pub delimiter: Option<String>,
    /// Page size; [`DEFAULT_MAX_KEYS`] when absent.
    pub max_keys: Option<usize>,
    /// Only list keys sorting after this one.
    pub start_after: Option<String>,
    /// Token from a previous truncated page; takes precedence over `start_after`.
    pub continuation_token: Option<String>,
}

impl ListObjectsV2Input {
    /// Input listing a whole bucket.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Self::default()
        }
    }
}

/// One entry of a `ListObjectsV2` response.
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    /// Object key.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Quoted hex MD5 of the object.
    pub e_tag: String,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// Always `STANDARD`.
    pub storage_class: String,
}

/// S3 ListObjectsV2Output.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Output {
    /// Listed bucket.
    pub name: String,
    /// Prefix from the request.
    pub prefix: Option<String>,
    /// Delimiter from the request.
    pub delimiter: Option<String>,
    /// Effective page size.
    pub max_keys: usize,
    /// Objects plus common prefixes on this page.
    pub key_count: usize,
    /// Whether more entries follow.
    pub is_truncated: bool,
    /// Objects on this page, in key order.
    pub contents: Vec<ObjectSummary>,
    /// Rolled-up prefixes on this page, in key order.
    pub common_prefixes: Vec<String>,
    /// Token from the request.
    pub continuation_token: Option<String>,
    /// Token for the next page, set only when truncated.
    pub next_continuation_token: Option<String>,
    /// `start_after` from the request.
    pub start_after: Option<String>,
}
