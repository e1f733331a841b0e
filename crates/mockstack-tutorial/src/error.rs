//! Scenario failures.

use mockstack_s3::S3ServiceError;

/// Why the end-to-end scenario failed.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// A storage call failed.
    #[error("storage call failed: {0}")]
    Storage(#[from] S3ServiceError),

    /// Listing did not return exactly the uploaded key.
    #[error("expected exactly [{expected}] in the listing, found {found:?}")]
    UnexpectedListing {
        /// The key that was uploaded.
        expected: String,
        /// The keys the listing returned.
        found: Vec<String>,
    },

    /// The retrieved body differs from the uploaded one.
    #[error("retrieved {actual_len} bytes that differ from the {expected_len} bytes uploaded")]
    BodyMismatch {
        /// Length of the uploaded body.
        expected_len: usize,
        /// Length of the retrieved body.
        actual_len: usize,
    },
}
