//! Cache Key Construction
//!
//! Callers are expected to derive keys from a logical resource name plus a
//! canonical serialization of their filter parameters, so two identical
//! queries collide to the same key and two different filter sets never do.
//! The cache itself performs no key validation or normalization; this helper
//! just makes the convention easy to follow.

use serde::Serialize;
use tracing::warn;

// == Resource Key ==
/// Builds a `"<resource>_<serialized-filters>"` cache key.
///
/// Filters are rendered as JSON. Maps serialize with sorted keys, so two
/// filter structs carrying the same fields produce the same key regardless
/// of declaration order. If the filters fail to serialize, the bare resource
/// name is returned and a warning is logged - key construction never fails.
pub fn resource_key(resource: &str, filters: &impl Serialize) -> String {
    match serde_json::to_string(filters) {
        Ok(serialized) => format!("{}_{}", resource, serialized),
        Err(err) => {
            warn!(resource, error = %err, "filter serialization failed, using bare resource key");
            resource.to_string()
        }
    }
}
