//! Conditional request support
//!
//! Strong `ETag` generation and `If-None-Match` evaluation. There is no
//! content cache behind this; the `ETag` is recomputed from the bytes
//! being served.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Quoted `ETag` for a body, e.g. `"9f86d081884c7d65"`.
pub fn content_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:016x}\"", hasher.finish())
}

/// Whether an `If-None-Match` header matches the current `ETag`.
///
/// Handles a single value, a comma-separated list, and the `*` wildcard.
/// A match means the client's copy is current and a 304 is in order.
pub fn none_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag || candidate == "*")
    })
}
