//! Process-level configuration shared by all mocked services.
//!
//! Values come from environment variables so a test run can be tuned without
//! touching code.

use crate::error::{MockStackError, MockStackResult};
use crate::types::AwsRegion;

/// Global configuration for MockStack.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockStackConfig {
    /// Region assigned to resources created without an explicit one.
    pub default_region: AwsRegion,
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for MockStackConfig {
    fn default() -> Self {
        Self {
            default_region: AwsRegion::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl MockStackConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = AwsRegion::new(v);
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Reject configurations that cannot be used.
    ///
    /// # Errors
    /// Returns [`MockStackError::Config`] when the region or log level is blank.
    pub fn validate(&self) -> MockStackResult<()> {
        if self.default_region.as_str().trim().is_empty() {
            return Err(MockStackError::Config("default region is empty".to_owned()));
        }
        if self.log_level.trim().is_empty() {
            return Err(MockStackError::Config("log level is empty".to_owned()));
        }
        Ok(())
    }
}
