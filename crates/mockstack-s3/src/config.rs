//! S3 mock configuration.
//!
//! Provides [`S3Config`] for tuning a mocked S3 session. Values can be set in
//! code through the builder or loaded from environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Mocked S3 configuration.
///
/// # Examples
///
/// ```
/// use mockstack_s3::config::S3Config;
///
/// let config = S3Config::default();
/// assert_eq!(config.default_region, "us-east-1");
/// assert!(!config.strict_bucket_names);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct S3Config {
    /// Region assigned to buckets created without a location constraint.
    #[builder(default = String::from("us-east-1"))]
    pub default_region: String,

    /// Maximum object size (in bytes) kept in memory before spilling to disk.
    #[builder(default = 524_288)]
    pub max_memory_object_size: usize,

    /// Reject legacy bucket names (underscores) when set.
    #[builder(default = false)]
    pub strict_bucket_names: bool,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            default_region: String::from("us-east-1"),
            max_memory_object_size: 524_288,
            strict_bucket_names: false,
            log_level: String::from("info"),
        }
    }
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `S3_MAX_MEMORY_OBJECT_SIZE` | `524288` |
    /// | `S3_STRICT_BUCKET_NAMES` | `false` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = v;
        }
        if let Ok(v) = std::env::var("S3_MAX_MEMORY_OBJECT_SIZE") {
            if let Ok(n) = v.parse::<usize>() {
                config.max_memory_object_size = n;
            }
        }
        if let Ok(v) = std::env::var("S3_STRICT_BUCKET_NAMES") {
            config.strict_bucket_names = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}

impl From<&mockstack_core::MockStackConfig> for S3Config {
    fn from(core: &mockstack_core::MockStackConfig) -> Self {
        Self {
            default_region: core.default_region.as_str().to_owned(),
            log_level: core.log_level.clone(),
            ..Self::default()
        }
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
