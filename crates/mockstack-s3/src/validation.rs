//! Validation of bucket names and object keys.
//!
//! Bucket naming follows the
//! [Amazon S3 rules](https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html),
//! with one relaxation kept from legacy `us-east-1` naming: underscores are
//! accepted unless strict naming is requested.

use std::net::Ipv4Addr;

use crate::error::S3ServiceError;

/// Maximum object key length in bytes.
const MAX_KEY_BYTES: usize = 1024;

/// Minimum bucket name length.
const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum bucket name length.
const MAX_BUCKET_NAME_LEN: usize = 63;

/// Validate an S3 bucket name.
///
/// Rules:
/// - 3-63 characters long
/// - Only lowercase letters, numbers, hyphens, and dots (plus underscores
///   when `strict` is `false`)
/// - Must start and end with a letter or number
/// - No consecutive dots (`..`)
/// - Not formatted as an IPv4 address (e.g. `192.168.0.1`)
/// - Must not start with `xn--` or `sthree-`, or end with `-s3alias`
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidBucketName`] if any rule is violated.
///
/// # Examples
///
/// ```
/// use mockstack_s3::validation::validate_bucket_name;
///
/// assert!(validate_bucket_name("my-valid-bucket", true).is_ok());
/// assert!(validate_bucket_name("test_bucket", false).is_ok());
/// assert!(validate_bucket_name("test_bucket", true).is_err());
/// assert!(validate_bucket_name("AB", false).is_err());
/// ```
pub fn validate_bucket_name(name: &str, strict: bool) -> Result<(), S3ServiceError> {
    let invalid = |reason: &str| S3ServiceError::InvalidBucketName {
        name: name.to_owned(),
        reason: reason.to_owned(),
    };

    let len = name.len();
    if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len) {
        return Err(invalid(&format!(
            "Bucket name must be between {MIN_BUCKET_NAME_LEN} and {MAX_BUCKET_NAME_LEN} characters long"
        )));
    }

    let allowed = |b: u8| {
        b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.' || (!strict && b == b'_')
    };
    if !name.bytes().all(allowed) {
        return Err(invalid(if strict {
            "Bucket name must only contain lowercase letters, numbers, hyphens, and dots"
        } else {
            "Bucket name must only contain lowercase letters, numbers, hyphens, dots, and underscores"
        }));
    }

    let first = name.as_bytes()[0];
    let last = name.as_bytes()[len - 1];
    if !(first.is_ascii_lowercase() || first.is_ascii_digit())
        || !(last.is_ascii_lowercase() || last.is_ascii_digit())
    {
        return Err(invalid("Bucket name must start and end with a letter or number"));
    }

    if name.contains("..") {
        return Err(invalid("Bucket name must not contain consecutive dots"));
    }

    if name.parse::<Ipv4Addr>().is_ok() {
        return Err(invalid("Bucket name must not be formatted as an IP address"));
    }

    if name.starts_with("xn--") {
        return Err(invalid("Bucket name must not start with 'xn--'"));
    }

    if name.starts_with("sthree-") {
        return Err(invalid("Bucket name must not start with 'sthree-'"));
    }

    if name.ends_with("-s3alias") {
        return Err(invalid("Bucket name must not end with '-s3alias'"));
    }

    Ok(())
}

/// Validate an S3 object key: 1-1024 bytes.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] for an empty key and
/// [`S3ServiceError::KeyTooLong`] past 1024 bytes.
///
/// # Examples
///
/// ```
/// use mockstack_s3::validation::validate_object_key;
///
/// assert!(validate_object_key("somewhere/something.txt").is_ok());
/// assert!(validate_object_key("").is_err());
/// ```
pub fn validate_object_key(key: &str) -> Result<(), S3ServiceError> {
    if key.is_empty() {
        return Err(S3ServiceError::InvalidArgument {
            message: "Object key must not be empty".to_owned(),
        });
    }

    if key.len() > MAX_KEY_BYTES {
        return Err(S3ServiceError::KeyTooLong);
    }

    Ok(())
}
