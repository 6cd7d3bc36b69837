use std::path::{Path, PathBuf};

use oav_core::ResolvedDocument;
use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse json {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("parse yaml {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{path}: document root must be a mapping")]
    NotAnObject { path: PathBuf },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Guess from the file extension; `None` means "try both".
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Load an already-resolved API description from disk.
pub fn load_document(path: &Path) -> Result<ResolvedDocument, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, DocumentFormat::from_path(path), path)
}

/// Parse document text. `path` is used only for error messages.
pub fn parse_document(
    text: &str,
    format: Option<DocumentFormat>,
    path: &Path,
) -> Result<ResolvedDocument, LoadError> {
    let root = match format {
        Some(DocumentFormat::Json) => parse_json(text, path)?,
        Some(DocumentFormat::Yaml) => parse_yaml(text, path)?,
        None => match parse_json(text, path) {
            Ok(v) => v,
            Err(_) => {
                tracing::debug!(path = %path.display(), "not json, retrying as yaml");
                parse_yaml(text, path)?
            }
        },
    };

    if !root.is_object() {
        return Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    Ok(ResolvedDocument::new(root))
}

fn parse_json(text: &str, path: &Path) -> Result<Value, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_yaml(text: &str, path: &Path) -> Result<Value, LoadError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(yaml_to_json(yaml))
}

/// YAML allows non-string keys (`200:` under `responses` is the usual one);
/// JSON does not, so keys are stringified on the way across.
fn yaml_to_json(v: serde_yaml::Value) -> Value {
    match v {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64().and_then(Number::from_f64).map(Value::Number).unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (k, v) in mapping {
                map.insert(yaml_key(k), yaml_to_json(v));
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(k: serde_yaml::Value) -> String {
    match k {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
