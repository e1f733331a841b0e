//! Key-ordered object storage for a single bucket.
//!
//! [`KeyStore`] keeps object descriptors in a `BTreeMap` so listings come
//! back in key order and pagination can resume from any key.

use std::collections::BTreeMap;
use std::ops::Bound;

use super::object::S3Object;

/// Result of a `ListObjectsV2` scan over a [`KeyStore`].
#[derive(Debug, Clone, Default)]
pub struct ListResult {
    /// The objects that match the listing criteria.
    pub objects: Vec<S3Object>,
    /// Common prefixes when a delimiter is used.
    pub common_prefixes: Vec<String>,
    /// Whether more entries remain after this page.
    pub is_truncated: bool,
    /// Last key or common prefix returned, set only when truncated.
    pub next_marker: Option<String>,
}

/// Un-versioned key store. Each key maps to exactly one [`S3Object`].
#[derive(Debug, Default)]
pub struct KeyStore {
    objects: BTreeMap<String, S3Object>,
}

impl KeyStore {
    /// Insert or replace an object. Returns the previous object if any.
    pub fn put(&mut self, object: S3Object) -> Option<S3Object> {
        self.objects.insert(object.key.clone(), object)
    }

    /// Get an object by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&S3Object> {
        self.objects.get(key)
    }

    /// Remove an object by key. Returns the removed object if any.
    pub fn delete(&mut self, key: &str) -> Option<S3Object> {
        self.objects.remove(key)
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// List objects after `start_after` that begin with `prefix`.
    ///
    /// With a non-empty `delimiter`, keys sharing the segment up to the next
    /// delimiter collapse into one common prefix. Objects and common prefixes
    /// both count toward `max_keys`.
    #[must_use]
    pub fn list_objects(
        &self,
        prefix: &str,
        delimiter: &str,
        start_after: &str,
        max_keys: usize,
    ) -> ListResult {
        let mut result = ListResult::default();
        if max_keys == 0 {
            return result;
        }

        let use_delim = !delimiter.is_empty();
        let lower = scan_start(prefix, start_after);
        let mut last_marker: Option<String> = None;

        for (key, obj) in self.objects.range::<str, _>((lower, Bound::Unbounded)) {
            if !key.starts_with(prefix) {
                // Matching keys are contiguous; once past them nothing else matches.
                if key.as_str() > prefix {
                    break;
                }
                continue;
            }

            if use_delim {
                let after_prefix = &key[prefix.len()..];
                if let Some(pos) = after_prefix.find(delimiter) {
                    let cp = format!("{prefix}{}{delimiter}", &after_prefix[..pos]);
                    if cp == start_after || result.common_prefixes.last() == Some(&cp) {
                        continue;
                    }
                    if result.objects.len() + result.common_prefixes.len() >= max_keys {
                        result.is_truncated = true;
                        break;
                    }
                    last_marker = Some(cp.clone());
                    result.common_prefixes.push(cp);
                    continue;
                }
            }

            if result.objects.len() + result.common_prefixes.len() >= max_keys {
                result.is_truncated = true;
                break;
            }
            last_marker = Some(key.clone());
            result.objects.push(obj.clone());
        }

        if result.is_truncated {
            result.next_marker = last_marker;
        }
        result
    }
}

/// First key a listing has to look at: past `start_after`, and no earlier
/// than `prefix`.
fn scan_start<'a>(prefix: &'a str, start_after: &'a str) -> Bound<&'a str> {
    if start_after.is_empty() && prefix.is_empty() {
        Bound::Unbounded
    } else if prefix > start_after {
        Bound::Included(prefix)
    } else {
        Bound::Excluded(start_after)
    }
}
