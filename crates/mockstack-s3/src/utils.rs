//! Continuation-token helpers for paginated listings.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::error::S3ServiceError;

/// Encode the last key of a page into an opaque continuation token.
///
/// # Examples
///
/// ```
/// use mockstack_s3::utils::{decode_continuation_token, encode_continuation_token};
///
/// let token = encode_continuation_token("photos/2024/img.jpg");
/// assert_eq!(decode_continuation_token(&token).unwrap(), "photos/2024/img.jpg");
/// ```
#[must_use]
pub fn encode_continuation_token(key: &str) -> String {
    BASE64_STANDARD.encode(key.as_bytes())
}

/// Decode a continuation token back to the key it was produced from.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] if the token is not valid
/// base64 or does not decode to valid UTF-8.
pub fn decode_continuation_token(token: &str) -> Result<String, S3ServiceError> {
    let bytes = BASE64_STANDARD
        .decode(token)
        .map_err(|_| S3ServiceError::InvalidArgument {
            message: "The continuation token provided is incorrect".to_owned(),
        })?;
    String::from_utf8(bytes).map_err(|_| S3ServiceError::InvalidArgument {
        message: "Continuation token contains invalid UTF-8".to_owned(),
    })
}
