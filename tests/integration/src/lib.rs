//! Integration tests for MockStack.
//!
//! Every test starts its own mocked session, so they run in parallel under a
//! plain `cargo test -p mockstack-integration`.

use std::sync::Once;

use mockstack_s3::client::ObjectStorage;
use mockstack_s3::model::CreateBucketInput;
use mockstack_s3::{MockSession, S3Config};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Start a session with default settings.
#[must_use]
pub fn start_session() -> MockSession {
    init_tracing();
    MockSession::start()
}

/// Start a session with a small spill threshold so large-body paths run.
#[must_use]
pub fn start_spilling_session(max_memory_object_size: usize) -> MockSession {
    init_tracing();
    MockSession::start_with(
        S3Config::builder()
            .max_memory_object_size(max_memory_object_size)
            .build(),
    )
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a bucket and return its name.
pub async fn create_test_bucket(client: &impl ObjectStorage, prefix: &str) -> String {
    let name = test_bucket_name(prefix);
    client
        .create_bucket(CreateBucketInput::new(&name))
        .await
        .unwrap_or_else(|e| panic!("failed to create bucket {name}: {e}"));
    name
}

mod test_error;
mod test_list;
mod test_object;
mod test_scenario;
mod test_session;
