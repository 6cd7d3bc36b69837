use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An API description whose references have already been expanded.
///
/// The document is kept as a raw JSON tree so that rules can read whatever
/// they need; nothing in the engine writes to it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ResolvedDocument(Value);

impl ResolvedDocument {
    pub fn new(root: Value) -> Self {
        Self(root)
    }

    pub fn root(&self) -> &Value {
        &self.0
    }

    /// The `paths` map, or `None` when it is absent or not a mapping.
    pub fn paths(&self) -> Option<&Map<String, Value>> {
        self.0.get("paths").and_then(Value::as_object)
    }

    /// Path keys in document order.
    pub fn path_keys(&self) -> impl Iterator<Item = &str> {
        self.paths().into_iter().flat_map(|paths| paths.keys().map(String::as_str))
    }

    pub fn has_path(&self, key: &str) -> bool {
        self.paths().map(|paths| paths.contains_key(key)).unwrap_or(false)
    }
}

impl From<Value> for ResolvedDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
