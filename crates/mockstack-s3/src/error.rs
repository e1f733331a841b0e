//! Errors produced by the mocked S3 service.
//!
//! [`S3ServiceError`] carries the S3 error codes a caller can observe from the
//! mock. [`S3ServiceError::code`] returns the wire-level code string so tests
//! can assert on it the way they would against the real service.
//!
//! ```
//! use mockstack_s3::error::S3ServiceError;
//!
//! let err = S3ServiceError::NoSuchBucket {
//!     bucket: "my-bucket".to_owned(),
//! };
//! assert_eq!(err.code(), "NoSuchBucket");
//! ```

/// S3 service error type.
#[derive(Debug, thiserror::Error)]
pub enum S3ServiceError {
    // -----------------------------------------------------------------------
    // Bucket errors
    // -----------------------------------------------------------------------
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The bucket already exists and is owned by you.
    #[error(
        "Your previous request to create the named bucket succeeded and you already own it: {bucket}"
    )]
    BucketAlreadyOwnedByYou {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// The bucket is not empty and cannot be deleted.
    #[error("The bucket you tried to delete is not empty: {bucket}")]
    BucketNotEmpty {
        /// The bucket name that is not empty.
        bucket: String,
    },

    // -----------------------------------------------------------------------
    // Object errors
    // -----------------------------------------------------------------------
    /// The specified key does not exist.
    #[error("The specified key does not exist: {key}")]
    NoSuchKey {
        /// The key that was not found.
        key: String,
    },

    /// The key is longer than 1024 bytes.
    #[error("Your key is too long")]
    KeyTooLong,

    /// The requested range is not satisfiable.
    #[error("The requested range is not satisfiable")]
    InvalidRange,

    // -----------------------------------------------------------------------
    // Validation errors
    // -----------------------------------------------------------------------
    /// The specified bucket name is not valid.
    #[error("Invalid bucket name: {name}: {reason}")]
    InvalidBucketName {
        /// The invalid bucket name.
        name: String,
        /// The reason for the error.
        reason: String,
    },

    /// An argument provided is invalid.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    // -----------------------------------------------------------------------
    // Session lifecycle
    // -----------------------------------------------------------------------
    /// The mocked session backing this client has ended.
    #[error("The mocked S3 session has ended; start a new session to continue")]
    SessionClosed,

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl S3ServiceError {
    /// The S3 error code string for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoSuchBucket { .. } => "NoSuchBucket",
            Self::BucketAlreadyOwnedByYou { .. } => "BucketAlreadyOwnedByYou",
            Self::BucketNotEmpty { .. } => "BucketNotEmpty",
            Self::NoSuchKey { .. } => "NoSuchKey",
            Self::KeyTooLong => "KeyTooLongError",
            Self::InvalidRange => "InvalidRange",
            Self::InvalidBucketName { .. } => "InvalidBucketName",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::SessionClosed => "SessionClosed",
            Self::Internal(_) => "InternalError",
        }
    }

    /// The HTTP status the real service would answer with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NoSuchBucket { .. } | Self::NoSuchKey { .. } => 404,
            Self::BucketAlreadyOwnedByYou { .. } | Self::BucketNotEmpty { .. } => 409,
            Self::InvalidRange => 416,
            Self::KeyTooLong | Self::InvalidBucketName { .. } | Self::InvalidArgument { .. } => {
                400
            }
            Self::SessionClosed | Self::Internal(_) => 500,
        }
    }
}

/// Convenience result type for S3 service operations.
pub type S3ServiceResult<T> = Result<T, S3ServiceError>;
