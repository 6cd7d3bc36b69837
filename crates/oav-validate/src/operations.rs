use oav_core::{ResolvedDocument, Verb};
use serde_json::Value;

/// One operation of the document, flattened out of its path item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationRecord<'a> {
    pub path_key: &'a str,
    pub verb: Verb,
    /// `None` when the operation has no `operationId`, or it is not a string.
    pub operation_id: Option<&'a str>,
    /// Every verb declared on the same path, in declaration order.
    pub path_operations: Vec<Verb>,
}

impl OperationRecord<'_> {
    /// Dotted locator of the operation itself, `paths.<path>.<verb>`.
    pub fn locator(&self) -> String {
        format!("paths.{}.{}", self.path_key, self.verb)
    }

    pub fn path_has(&self, verb: Verb) -> bool {
        self.path_operations.contains(&verb)
    }
}

/// Flatten `paths` into operation records, in document path order and then
/// declared verb order. Non-verb keys of a path item are ignored; a missing
/// or malformed `paths` map yields nothing.
pub fn extract_operations(doc: &ResolvedDocument) -> Vec<OperationRecord<'_>> {
    let Some(paths) = doc.paths() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (path_key, item) in paths {
        let Some(item) = item.as_object() else {
            continue;
        };

        let ops: Vec<(Verb, &Value)> = item
            .iter()
            .filter_map(|(k, op)| Verb::from_key(k).map(|verb| (verb, op)))
            .collect();
        let path_operations: Vec<Verb> = ops.iter().map(|(verb, _)| *verb).collect();

        for (verb, op) in ops {
            out.push(OperationRecord {
                path_key: path_key.as_str(),
                verb,
                operation_id: op.get("operationId").and_then(Value::as_str),
                path_operations: path_operations.clone(),
            });
        }
    }
    out
}
