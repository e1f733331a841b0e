//! Object body storage for a mocked session.
//!
//! Bodies up to a configurable threshold are kept in memory as [`Bytes`].
//! Larger bodies are spilled to temporary files that are removed when the
//! last handle to them is dropped, so ending a session leaves nothing behind
//! on disk.
//!
//! Writing is split in two steps. [`InMemoryStorage::stage`] does the slow
//! part (hashing and spilling) without touching the map, and
//! [`InMemoryStorage::insert`] publishes the staged body. Callers that keep
//! metadata elsewhere publish both under their own lock.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use tempfile::NamedTempFile;
use tracing::{debug, trace, warn};

use crate::checksums;
use crate::error::S3ServiceError;

/// Composite key identifying a stored body: `(bucket, key)`.
type StorageKey = (String, String);

/// Default maximum body size (in bytes) kept in memory: 512 KiB.
const DEFAULT_MAX_MEMORY_SIZE: usize = 524_288;

/// Result of writing a body.
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// The ETag (quoted hex MD5) of the written data.
    pub etag: String,
    /// The size in bytes.
    pub size: u64,
}

/// Where a body lives.
enum StoredData {
    InMemory(Bytes),
    OnDisk(PathBuf),
}

impl Drop for StoredData {
    fn drop(&mut self) {
        if let Self::OnDisk(path) = self {
            match std::fs::remove_file(path.as_path()) {
                Ok(()) => trace!(path = %path.display(), "removed spill file"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), error = %e, "failed to remove spill file"),
            }
        }
    }
}

/// An immutable object body with its ETag.
///
/// Handed out as `Arc<StoredBody>`: a read that already holds the handle
/// keeps a spill file alive even if the key is overwritten meanwhile.
pub struct StoredBody {
    data: StoredData,
    etag: String,
    size: u64,
}

impl std::fmt::Debug for StoredBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("StoredBody");
        s.field("etag", &self.etag).field("size", &self.size);
        if let StoredData::OnDisk(path) = &self.data {
            s.field("path", path);
        }
        s.finish()
    }
}

impl StoredBody {
    /// Quoted hex MD5 of the body.
    #[must_use]
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Body size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether the body was spilled to a temp file.
    #[must_use]
    pub fn is_on_disk(&self) -> bool {
        matches!(self.data, StoredData::OnDisk(_))
    }

    /// Read the body, optionally restricted to an inclusive `(start, end)` range.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::InvalidRange`] if the range is out of bounds.
    /// - [`S3ServiceError::Internal`] if a spill file cannot be read.
    pub async fn read(&self, range: Option<(u64, u64)>) -> Result<Bytes, S3ServiceError> {
        let all_data = match &self.data {
            StoredData::InMemory(data) => data.clone(),
            StoredData::OnDisk(path) => read_spill_file(path).await?,
        };
        apply_range(all_data, range)
    }
}

/// Body storage keyed by `(bucket, key)`, with spillover for large bodies.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use mockstack_s3::storage::InMemoryStorage;
///
/// # tokio_test::block_on(async {
/// let storage = InMemoryStorage::new(1024);
/// let result = storage
///     .write_object("my-bucket", "hello.txt", Bytes::from("hello"))
///     .await
///     .unwrap();
/// assert_eq!(result.size, 5);
///
/// let data = storage.read_object("my-bucket", "hello.txt", None).await.unwrap();
/// assert_eq!(data.as_ref(), b"hello");
/// # });
/// ```
pub struct InMemoryStorage {
    objects: DashMap<StorageKey, Arc<StoredBody>>,
    max_memory_size: usize,
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("objects_count", &self.objects.len())
            .field("max_memory_size", &self.max_memory_size)
            .finish()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MEMORY_SIZE)
    }
}

impl InMemoryStorage {
    /// Create a storage backend that spills bodies above `max_memory_size`.
    #[must_use]
    pub fn new(max_memory_size: usize) -> Self {
        debug!(max_memory_size, "creating InMemoryStorage");
        Self {
            objects: DashMap::new(),
            max_memory_size,
        }
    }

    /// The spill threshold in bytes.
    #[must_use]
    pub fn max_memory_size(&self) -> usize {
        self.max_memory_size
    }

    /// Hash `data` and spill it if it is over the threshold, without
    /// publishing it under any key.
    ///
    /// Dropping the returned body discards it, spill file included.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::Internal`] if a spill file cannot be written.
    pub async fn stage(&self, data: Bytes) -> Result<StoredBody, S3ServiceError> {
        let etag = checksums::compute_etag(&data);
        let size = data.len() as u64;

        let data = if data.len() > self.max_memory_size {
            StoredData::OnDisk(spill_to_disk(&std::env::temp_dir(), &data).await?)
        } else {
            StoredData::InMemory(data)
        };

        Ok(StoredBody { data, etag, size })
    }

    /// Publish a staged body, replacing any previous body under the same key.
    pub fn insert(&self, bucket: &str, key: &str, body: StoredBody) {
        trace!(bucket, key, size = body.size, on_disk = body.is_on_disk(), "stored object body");
        self.objects
            .insert((bucket.to_owned(), key.to_owned()), Arc::new(body));
    }

    /// Handle to the body stored under `(bucket, key)`.
    #[must_use]
    pub fn get(&self, bucket: &str, key: &str) -> Option<Arc<StoredBody>> {
        self.objects
            .get(&(bucket.to_owned(), key.to_owned()))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Stage and publish a body in one call.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::Internal`] if a spill file cannot be written.
    pub async fn write_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
    ) -> Result<WriteResult, S3ServiceError> {
        let body = self.stage(data).await?;
        let result = WriteResult {
            etag: body.etag.clone(),
            size: body.size,
        };
        self.insert(bucket, key, body);
        Ok(result)
    }

    /// Read a body, optionally restricted to an inclusive `(start, end)` range.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::NoSuchKey`] if nothing is stored under the key.
    /// - [`S3ServiceError::InvalidRange`] if the range is out of bounds.
    /// - [`S3ServiceError::Internal`] if a spill file cannot be read.
    pub async fn read_object(
        &self,
        bucket: &str,
        key: &str,
        range: Option<(u64, u64)>,
    ) -> Result<Bytes, S3ServiceError> {
        let body = self
            .get(bucket, key)
            .ok_or_else(|| S3ServiceError::NoSuchKey {
                key: key.to_owned(),
            })?;
        body.read(range).await
    }

    /// Remove a body. No-op if nothing is stored under the key.
    pub fn delete_object(&self, bucket: &str, key: &str) {
        if self
            .objects
            .remove(&(bucket.to_owned(), key.to_owned()))
            .is_some()
        {
            trace!(bucket, key, "deleted object body");
        }
    }

    /// Remove every body stored for `bucket` and return how many were removed.
    pub fn delete_bucket_data(&self, bucket: &str) -> usize {
        let mut removed = 0_usize;
        self.objects.retain(|key, _| {
            let keep = key.0 != bucket;
            if !keep {
                removed += 1;
            }
            keep
        });
        debug!(bucket, objects_removed = removed, "deleted all bucket data");
        removed
    }

    /// Number of stored bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no bodies are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every body. Spill files go once no reader holds them.
    pub fn reset(&self) {
        debug!("resetting all storage data");
        self.objects.clear();
    }
}

/// Apply an optional inclusive range to a full body.
fn apply_range(data: Bytes, range: Option<(u64, u64)>) -> Result<Bytes, S3ServiceError> {
    match range {
        Some((start, end)) => slice_range(&data, start, end),
        None => Ok(data),
    }
}

/// Return `data[start..=end]`, rejecting out-of-bounds ranges.
fn slice_range(data: &Bytes, start: u64, end: u64) -> Result<Bytes, S3ServiceError> {
    let start = usize::try_from(start).map_err(|_| S3ServiceError::InvalidRange)?;
    let end = usize::try_from(end).map_err(|_| S3ServiceError::InvalidRange)?;
    if start > end || start >= data.len() {
        return Err(S3ServiceError::InvalidRange);
    }
    // S3 clamps an end past the last byte.
    let end = end.min(data.len() - 1);
    Ok(data.slice(start..=end))
}

async fn read_spill_file(path: &Path) -> Result<Bytes, S3ServiceError> {
    let data = tokio::fs::read(path).await.map_err(|e| {
        S3ServiceError::Internal(anyhow::anyhow!(
            "failed to read spill file {}: {e}",
            path.display()
        ))
    })?;
    Ok(Bytes::from(data))
}

/// Write `data` to a fresh temp file in `dir` and return its path.
///
/// The file is owned by the `NamedTempFile` until the write succeeds, so a
/// failed write removes it.
async fn spill_to_disk(dir: &Path, data: &[u8]) -> Result<PathBuf, S3ServiceError> {
    let temp = NamedTempFile::new_in(dir)
        .map_err(|e| S3ServiceError::Internal(anyhow::anyhow!("failed to create spill file: {e}")))?;

    tokio::fs::write(temp.path(), data).await.map_err(|e| {
        S3ServiceError::Internal(anyhow::anyhow!(
            "failed to write spill file {}: {e}",
            temp.path().display()
        ))
    })?;

    let (_, path) = temp
        .keep()
        .map_err(|e| S3ServiceError::Internal(anyhow::anyhow!("failed to keep spill file: {}", e.error)))?;

    trace!(path = %path.display(), size = data.len(), "spilled body to disk");
    Ok(path)
}
