//! Deduplication by normalized URL identity.
//!
//! The key ignores parameter values so `?id=1` and `?id=2` collapse to one
//! emission. The seen-set does its check-then-insert inside a single mutex
//! guard, keeping it correct if line processing is ever parallelized.

use std::collections::{BTreeSet, HashSet};
use std::sync::Mutex;

use crate::url_model::ParsedUrl;

/// `hostname + escaped-path + "?" + sorted unique parameter names`.
/// Hostless lines use an empty hostname.
pub fn dedupe_key(url: &ParsedUrl) -> String {
    let names: BTreeSet<&str> = url.query_pairs().iter().map(|(k, _)| k.as_str()).collect();
    let names = names.into_iter().collect::<Vec<_>>().join("&");
    format!("{}{}?{}", url.host_str().unwrap_or(""), url.path(), names)
}

/// Process-lifetime set of already-emitted dedupe keys.
#[derive(Debug, Default)]
pub struct SeenSet {
    seen: Mutex<HashSet<String>>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically records `key`; returns true when it was not seen before.
    pub fn check_and_insert(&self, key: String) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key)
    }
}
