use oav_core::ResolvedDocument;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

pub fn canonical_json(doc: &ResolvedDocument) -> Value {
    sort_json(doc.root().clone())
}

/// Recursively sort object keys for stable hashing.
fn sort_json(v: Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (k, child) in entries {
                sorted.insert(k, sort_json(child));
            }
            Value::Object(sorted)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(sort_json).collect()),
        other => other,
    }
}

/// Hex SHA-256 of the canonical JSON encoding. Independent of key order and
/// of whether the document came from JSON or YAML.
pub fn document_digest(doc: &ResolvedDocument) -> String {
    let canonical = canonical_json(doc);
    let mut hasher = Sha256::new();
    hasher.update(canonical.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
