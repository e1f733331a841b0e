//! MockStack walkthrough: run the storage scenario against a mocked S3 session.
//!
//! Starts a session, runs the scenario through a client bound to it, prints
//! what was observed, then ends the session and shows that its state is gone.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEFAULT_REGION` | `us-east-1` | Region for created buckets |
//! | `S3_MAX_MEMORY_OBJECT_SIZE` | `524288` | Bodies above this spill to temp files |
//! | `S3_STRICT_BUCKET_NAMES` | `false` | Reject legacy names such as `test_bucket` |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use mockstack_core::MockStackConfig;
use mockstack_s3::client::ObjectStorage;
use mockstack_s3::{MockSession, S3Config, S3ServiceError};
use mockstack_tutorial::run_scenario;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Merge the core settings with the S3-specific environment.
fn load_config() -> Result<S3Config> {
    let core = MockStackConfig::from_env();
    core.validate().context("invalid MockStack configuration")?;

    let env = S3Config::from_env();
    Ok(S3Config {
        max_memory_object_size: env.max_memory_object_size,
        strict_bucket_names: env.strict_bucket_names,
        ..S3Config::from(&core)
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    init_tracing(&config.log_level)?;

    let session = MockSession::start_with(config);
    let client = session.client();
    info!(session = %session.id(), "running scenario");

    let report = run_scenario(&client)
        .await
        .context("scenario failed inside the mocked session")?;

    println!("bucket:    {}", report.bucket);
    println!("key:       {}", report.key);
    println!("listed:    {:?}", report.listed_keys);
    println!("etag:      {}", report.e_tag);
    println!("retrieved: {}", String::from_utf8_lossy(&report.retrieved));

    session.stop();

    match client.list_buckets().await {
        Err(S3ServiceError::SessionClosed) => {
            println!("session ended: buckets and objects discarded");
            Ok(())
        }
        Err(e) => Err(e).context("unexpected error after session end"),
        Ok(out) => anyhow::bail!(
            "session state outlived the session: {} bucket(s) still visible",
            out.buckets.len()
        ),
    }
}
