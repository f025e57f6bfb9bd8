//! `composer.json` autoload patch.
//!
//! The manifest is parsed, one key path is set, and the document is written
//! back pretty-printed with four-space indentation. Key order is preserved
//! (`serde_json` is built with `preserve_order`) and forward slashes are
//! never escaped.

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::domain::DomainError;

/// Manifest file name, relative to the project root.
pub const MANIFEST: &str = "composer.json";

/// Namespace prefix registered for the new source tree.
pub const PSR4_NAMESPACE: &str = "Src\\";

/// Directory the prefix maps to.
pub const PSR4_PATH: &str = "src/";

/// Set `autoload.psr-4["Src\\"] = "src/"` and re-serialize.
///
/// Missing `autoload` or `psr-4` objects are created; an existing `Src\\`
/// entry is overwritten. Every other key keeps its value and position.
pub fn register_psr4_namespace(manifest: &str) -> Result<String, DomainError> {
    let mut document: Value =
        serde_json::from_str(manifest).map_err(|e| DomainError::InvalidManifest {
            reason: e.to_string(),
        })?;

    let root = document
        .as_object_mut()
        .ok_or_else(|| invalid("root is not an object"))?;
    let autoload = object_entry(root, "autoload")?;
    let psr4 = object_entry(autoload, "psr-4")?;
    psr4.insert(PSR4_NAMESPACE.to_owned(), Value::String(PSR4_PATH.to_owned()));

    to_pretty_string(&document)
}

/// Borrow `map[key]` as an object, creating it when absent or null.
fn object_entry<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>, DomainError> {
    let entry = map
        .entry(key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if entry.is_null() {
        *entry = Value::Object(Map::new());
    }
    entry
        .as_object_mut()
        .ok_or_else(|| invalid(&format!("'{key}' is not an object")))
}

fn to_pretty_string(document: &Value) -> Result<String, DomainError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    document
        .serialize(&mut serializer)
        .map_err(|e| invalid(&e.to_string()))?;
    String::from_utf8(buf).map_err(|e| invalid(&e.to_string()))
}

fn invalid(reason: &str) -> DomainError {
    DomainError::InvalidManifest {
        reason: reason.to_owned(),
    }
}
