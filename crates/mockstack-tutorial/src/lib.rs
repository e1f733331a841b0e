//! Helpers that talk to object storage, and the scenario that tests them.
//!
//! The helpers never look up a storage client on their own. Callers pass the
//! client in, so a test can hand them a [`mockstack_s3::MockS3Client`] and be
//! sure nothing reaches a real account.
//!
//! ```
//! use mockstack_s3::mock_s3;
//! use mockstack_tutorial::{SCENARIO_CONTENTS, run_scenario};
//!
//! # tokio_test::block_on(async {
//! let report = mock_s3(|client| async move { run_scenario(&client).await })
//!     .await
//!     .unwrap();
//! assert_eq!(report.retrieved.as_ref(), SCENARIO_CONTENTS);
//! # });
//! ```

mod error;
mod helpers;
mod scenario;

pub use error::ScenarioError;
pub use helpers::{TEST_BUCKET, create_test_bucket, upload};
pub use scenario::{SCENARIO_CONTENTS, SCENARIO_KEY, ScenarioReport, run_scenario};
