//! Entity-tag computation.
//!
//! The mock reports the same ETag format as S3 for single-part uploads: the
//! quoted hex MD5 of the object body.

use md5::{Digest, Md5};

/// Compute the hex-encoded MD5 digest of `data`.
///
/// # Examples
///
/// ```
/// use mockstack_s3::checksums::compute_md5;
///
/// assert_eq!(compute_md5(b"hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
#[must_use]
pub fn compute_md5(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Compute the quoted hex MD5 of `data`, as used for an S3 ETag.
///
/// # Examples
///
/// ```
/// use mockstack_s3::checksums::compute_etag;
///
/// assert_eq!(compute_etag(b""), "\"d41d8cd98f00b204e9800998ecf8427e\"");
/// ```
#[must_use]
pub fn compute_etag(data: &[u8]) -> String {
    format!("\"{}\"", compute_md5(data))
}
