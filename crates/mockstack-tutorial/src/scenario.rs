//! The end-to-end storage scenario.
//!
//! Create a bucket, upload a known body, list the bucket, fetch the object,
//! and check that what comes back is what went in.

use bytes::Bytes;
use mockstack_s3::client::ObjectStorage;
use mockstack_s3::model::{GetObjectInput, ListObjectsV2Input};
use tracing::info;

use crate::error::ScenarioError;
use crate::helpers::{create_test_bucket, upload};

/// Key the scenario uploads to.
pub const SCENARIO_KEY: &str = "somewhere/something.txt";

/// Body the scenario uploads.
pub const SCENARIO_CONTENTS: &[u8] = b"Made up file contents because I have no imagination.";

/// What the scenario observed.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Bucket the scenario created.
    pub bucket: String,
    /// Key the body was uploaded to.
    pub key: String,
    /// Keys returned by the listing.
    pub listed_keys: Vec<String>,
    /// ETag reported for the stored object.
    pub e_tag: String,
    /// Body returned by the fetch.
    pub retrieved: Bytes,
}

/// Run the scenario against `client`.
///
/// # Errors
///
/// [`ScenarioError::Storage`] if any call fails, or the expectation error for
/// the first check that does not hold.
pub async fn run_scenario(
    client: &(impl ObjectStorage + ?Sized),
) -> Result<ScenarioReport, ScenarioError> {
    let bucket = create_test_bucket(client).await?;
    info!(bucket = %bucket, "created bucket");

    upload(client, Bytes::from_static(SCENARIO_CONTENTS), &bucket, SCENARIO_KEY).await?;
    info!(key = SCENARIO_KEY, bytes = SCENARIO_CONTENTS.len(), "uploaded object");

    let listing = client
        .list_objects_v2(ListObjectsV2Input::new(&bucket))
        .await?;
    let listed_keys: Vec<String> = listing.contents.into_iter().map(|o| o.key).collect();
    if listed_keys != [SCENARIO_KEY] {
        return Err(ScenarioError::UnexpectedListing {
            expected: SCENARIO_KEY.to_owned(),
            found: listed_keys,
        });
    }
    info!(count = listed_keys.len(), "listed bucket");

    let object = client
        .get_object(GetObjectInput::new(&bucket, SCENARIO_KEY))
        .await?;
    let e_tag = object.e_tag;
    let retrieved = object.body.collect().await;
    if retrieved.as_ref() != SCENARIO_CONTENTS {
        return Err(ScenarioError::BodyMismatch {
            expected_len: SCENARIO_CONTENTS.len(),
            actual_len: retrieved.len(),
        });
    }
    info!(e_tag = %e_tag, "retrieved body matches upload");

    Ok(ScenarioReport {
        bucket,
        key: SCENARIO_KEY.to_owned(),
        listed_keys,
        e_tag,
        retrieved,
    })
}
