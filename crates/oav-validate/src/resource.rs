use oav_core::ResolvedDocument;

/// Whether a path addresses a collection or a single member of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathShape<'a> {
    /// No trailing parameter segment, e.g. `/widgets`.
    Collection,
    /// Trailing `{param}` segment; `parent` is the path with it removed.
    Member { parent: &'a str },
}

impl<'a> PathShape<'a> {
    pub fn of(path_key: &'a str) -> Self {
        match member_parent(path_key) {
            Some(parent) => PathShape::Member { parent },
            None => PathShape::Collection,
        }
    }

    pub fn ends_with_param(&self) -> bool {
        matches!(self, PathShape::Member { .. })
    }
}

/// A segment is a parameter when the whole segment is `{name}` with a
/// non-empty name and no nested braces.
fn is_param_segment(segment: &str) -> bool {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .map(|name| !name.is_empty() && !name.contains(['{', '}']))
        .unwrap_or(false)
}

fn member_parent(path_key: &str) -> Option<&str> {
    let idx = path_key.rfind('/')?;
    if !is_param_segment(&path_key[idx + 1..]) {
        return None;
    }
    // `/{id}` belongs to the root collection `/`
    Some(if idx == 0 { "/" } else { &path_key[..idx] })
}

/// A path is resource oriented when the document holds its collection/member
/// counterpart: `/widgets/{id}` needs `/widgets`, and `/widgets` needs some
/// `/widgets/{param}`.
pub fn is_resource_oriented(path_key: &str, doc: &ResolvedDocument) -> bool {
    let oriented = match PathShape::of(path_key) {
        PathShape::Member { parent } => doc.has_path(parent),
        PathShape::Collection => doc
            .path_keys()
            .any(|other| other != path_key && member_parent(other) == Some(path_key)),
    };
    tracing::trace!(path = path_key, oriented, "resource orientation");
    oriented
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(keys: &[&str]) -> ResolvedDocument {
        let paths: serde_json::Map<String, serde_json::Value> =
            keys.iter().map(|k| (k.to_string(), json!({}))).collect();
        ResolvedDocument::new(json!({ "paths": paths }))
    }

    #[test]
    fn shape_of_paths() {
        assert_eq!(PathShape::of("/widgets"), PathShape::Collection);
        assert_eq!(PathShape::of("/widgets/{id}"), PathShape::Member { parent: "/widgets" });
        assert_eq!(
            PathShape::of("/a/{a_id}/b/{b-id}"),
            PathShape::Member { parent: "/a/{a_id}/b" }
        );
        assert_eq!(PathShape::of("/{id}"), PathShape::Member { parent: "/" });
        assert_eq!(PathShape::of("/files/{name}.json"), PathShape::Collection);
        assert_eq!(PathShape::of("/files/{}"), PathShape::Collection);
        assert_eq!(PathShape::of("/widgets/{id}/"), PathShape::Collection);
    }

    #[test]
    fn member_needs_its_collection() {
        let d = doc(&["/widgets", "/widgets/{id}", "/gadgets/{id}"]);
        assert!(is_resource_oriented("/widgets/{id}", &d));
        assert!(!is_resource_oriented("/gadgets/{id}", &d));
    }

    #[test]
    fn collection_needs_a_member() {
        let d = doc(&["/widgets", "/widgets/{id}", "/health", "/things", "/things/{id}/parts"]);
        assert!(is_resource_oriented("/widgets", &d));
        assert!(!is_resource_oriented("/health", &d));
        assert!(!is_resource_oriented("/things", &d));
    }

    #[test]
    fn odd_parameter_names_do_not_confuse_matching() {
        let d = doc(&["/v1/orgs/{org.id}/repos", "/v1/orgs/{org.id}/repos/{repo+}"]);
        assert!(is_resource_oriented("/v1/orgs/{org.id}/repos", &d));
        assert!(is_resource_oriented("/v1/orgs/{org.id}/repos/{repo+}", &d));
    }

    #[test]
    fn root_collection_pairs_with_root_member() {
        let d = doc(&["/", "/{id}"]);
        assert!(is_resource_oriented("/", &d));
        assert!(is_resource_oriented("/{id}", &d));
    }
}
