//! One-shot object body returned by `GetObject`.
//!
//! An [`ObjectBody`] is consumed by whichever read method is called first,
//! so the type system rules out reading the same response twice.

use std::io::Cursor;

use bytes::Bytes;
use futures::Stream;
use tokio::io::AsyncRead;

/// Chunk size used by [`ObjectBody::into_stream`].
const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Readable body of a fetched object.
///
/// ```
/// use bytes::Bytes;
/// use mockstack_s3::body::ObjectBody;
///
/// # tokio_test::block_on(async {
/// let body = ObjectBody::from(Bytes::from_static(b"hello"));
/// assert_eq!(body.collect().await.as_ref(), b"hello");
/// # });
/// ```
pub struct ObjectBody {
    data: Bytes,
}

impl std::fmt::Debug for ObjectBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectBody")
            .field("len", &self.data.len())
            .finish()
    }
}

impl From<Bytes> for ObjectBody {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

impl ObjectBody {
    /// Number of bytes in the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the whole body.
    // Async to match SDK-style call sites, although the bytes are already resident.
    #[allow(clippy::unused_async)]
    pub async fn collect(self) -> Bytes {
        self.data
    }

    /// Take the body without awaiting.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Turn the body into an [`AsyncRead`].
    #[must_use]
    pub fn into_reader(self) -> impl AsyncRead + Unpin + Send {
        Cursor::new(self.data)
    }

    /// Turn the body into a stream of chunks of at most 64 KiB.
    #[must_use]
    pub fn into_stream(self) -> impl Stream<Item = Bytes> + Unpin + Send {
        let mut rest = self.data;
        let mut chunks = Vec::with_capacity(rest.len().div_ceil(STREAM_CHUNK_SIZE));
        while !rest.is_empty() {
            let at = rest.len().min(STREAM_CHUNK_SIZE);
            chunks.push(rest.split_to(at));
        }
        futures::stream::iter(chunks)
    }
}
