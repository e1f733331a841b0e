//! Object records and ownership.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use mockstack_core::AccountId;
use serde::{Deserialize, Serialize};

/// Content type reported for objects uploaded without one.
pub const DEFAULT_CONTENT_TYPE: &str = "binary/octet-stream";

/// Storage class reported for every mocked object.
pub const STANDARD_STORAGE_CLASS: &str = "STANDARD";

/// The owner of a bucket or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// The canonical user ID of the owner.
    pub id: String,
    /// The display name of the owner.
    pub display_name: String,
}

impl Owner {
    /// Owner record for an account.
    #[must_use]
    pub fn for_account(account: &AccountId) -> Self {
        Self {
            id: account.as_str().to_owned(),
            display_name: "mockstack".to_owned(),
        }
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self::for_account(&AccountId::default())
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.display_name, self.id)
    }
}

/// Caller-supplied metadata stored alongside an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    /// MIME type given at upload time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// User-defined metadata (`x-amz-meta-*`).
    #[serde(default)]
    pub user_metadata: HashMap<String, String>,
}

impl ObjectMetadata {
    /// Content type, falling back to S3's default.
    #[must_use]
    pub fn content_type_or_default(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// A stored object's descriptor. The body itself lives in storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Object {
    /// The object key.
    pub key: String,
    /// Quoted hex MD5 of the body.
    pub etag: String,
    /// Body size in bytes.
    pub size: u64,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
    /// Always `STANDARD` in the mock.
    pub storage_class: String,
    /// Caller-supplied metadata.
    pub metadata: ObjectMetadata,
    /// The object owner.
    pub owner: Owner,
}
