//! Component registry types — upstream payloads and their normalized views.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Literal `status` value carried by successful results.
pub const STATUS_SUCCESS: &str = "success";

/// Literal `status` value carried by failed results.
pub const STATUS_ERROR: &str = "error";

/// Fixed description attached to the design-system context document.
pub const DESIGN_CONTEXT_DESCRIPTION: &str =
    "Full design system context and guidelines from Zendesign";

/// Derived struct deserializers also accept arrays; payloads must be objects.
fn expect_object(raw: &Value) -> Result<(), serde_json::Error> {
    if raw.is_object() {
        return Ok(());
    }
    Err(serde::de::Error::custom(format!(
        "expected a JSON object, found {}",
        match raw {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    )))
}

// ---------------------------------------------------------------------------
// ComponentRecord
// ---------------------------------------------------------------------------

/// Normalized view of a single design-system component.
///
/// Built fresh from each `/r/{name}.json` response. Missing optional fields
/// are replaced with empty values; the untouched payload is kept in
/// `raw_data` so callers can reach fields this view does not project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub dependencies: Vec<String>,
    /// File entries exactly as the registry sent them.
    pub files: Vec<Value>,
    #[serde(rename = "cssVars")]
    pub css_vars: Map<String, Value>,
    pub raw_data: Value,
}

impl ComponentRecord {
    /// Project an upstream payload. `fallback_name` is used when the payload
    /// carries no string `name` of its own.
    ///
    /// Only the top-level shape is checked. A field that is absent, null, or
    /// of an unexpected type takes its empty default; non-string entries of
    /// `dependencies` are skipped.
    pub fn from_payload(fallback_name: &str, raw: Value) -> Result<Self, serde_json::Error> {
        expect_object(&raw)?;
        let text = |key: &str| {
            raw.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let list = |key: &str| raw.get(key).and_then(Value::as_array).cloned().unwrap_or_default();

        Ok(Self {
            name: raw
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(fallback_name)
                .to_string(),
            title: text("title"),
            description: text("description"),
            component_type: text("type"),
            dependencies: list("dependencies")
                .iter()
                .filter_map(|dep| dep.as_str().map(String::from))
                .collect(),
            files: list("files"),
            css_vars: raw
                .get("cssVars")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
            raw_data: raw,
        })
    }
}

// ---------------------------------------------------------------------------
// Files & source code
// ---------------------------------------------------------------------------

/// A single source file as served by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ComponentSource {
    files: Vec<FileDescriptor>,
}

/// Component source files flattened into one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentCode {
    /// Pretty-printed JSON object mapping file name to file content.
    pub content: String,
    pub status: &'static str,
}

impl ComponentCode {
    /// Build from an `/r/e/{name}.json` payload. A later file with the same
    /// name replaces an earlier one.
    pub fn from_source(raw: &Value) -> Result<Self, serde_json::Error> {
        expect_object(raw)?;
        let source = ComponentSource::deserialize(raw)?;
        let files: BTreeMap<String, String> = source
            .files
            .into_iter()
            .map(|f| (f.name, f.content))
            .collect();
        Ok(Self {
            content: serde_json::to_string_pretty(&files)?,
            status: STATUS_SUCCESS,
        })
    }
}

// ---------------------------------------------------------------------------
// Registry manifest
// ---------------------------------------------------------------------------

/// The registry index served at `/r/registry.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryManifest {
    pub items: Vec<ManifestItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestItem {
    pub name: String,
}

/// Names of every component in the registry, in manifest order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentListing {
    pub components: Vec<String>,
    pub status: &'static str,
}

impl ComponentListing {
    pub fn from_manifest(raw: &Value) -> Result<Self, serde_json::Error> {
        expect_object(raw)?;
        let manifest = RegistryManifest::deserialize(raw)?;
        Ok(Self {
            components: manifest.items.into_iter().map(|item| item.name).collect(),
            status: STATUS_SUCCESS,
        })
    }
}

// ---------------------------------------------------------------------------
// Design-system context
// ---------------------------------------------------------------------------

/// The plain-text `llms.txt` document plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignContext {
    pub content: String,
    pub source: String,
    pub status: &'static str,
    /// Character count of `content`.
    pub length: usize,
    pub description: &'static str,
}

impl DesignContext {
    pub fn new(source: impl Into<String>, content: String) -> Self {
        Self {
            length: content.chars().count(),
            content,
            source: source.into(),
            status: STATUS_SUCCESS,
            description: DESIGN_CONTEXT_DESCRIPTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_fills_missing_fields() {
        let raw = json!({ "name": "button" });
        let record = ComponentRecord::from_payload("ignored", raw.clone()).unwrap();
        assert_eq!(record.name, "button");
        assert_eq!(record.title, "");
        assert_eq!(record.component_type, "");
        assert!(record.dependencies.is_empty());
        assert!(record.files.is_empty());
        assert!(record.css_vars.is_empty());
        assert_eq!(record.raw_data, raw);
    }

    #[test]
    fn record_falls_back_to_requested_name() {
        let record = ComponentRecord::from_payload("card", json!({ "title": "Card" })).unwrap();
        assert_eq!(record.name, "card");
        assert_eq!(record.title, "Card");
    }

    #[test]
    fn record_serializes_upstream_key_names() {
        let raw = json!({
            "name": "input",
            "type": "registry:ui",
            "dependencies": ["@radix-ui/react-slot"],
            "cssVars": { "light": { "radius": "0.5rem" } },
            "extra": 42
        });
        let record = ComponentRecord::from_payload("input", raw).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "registry:ui");
        assert_eq!(value["dependencies"], json!(["@radix-ui/react-slot"]));
        assert_eq!(value["cssVars"]["light"]["radius"], "0.5rem");
        assert_eq!(value["raw_data"]["extra"], 42);
    }

    #[test]
    fn record_tolerates_null_and_mistyped_fields() {
        let raw = json!({
            "name": 7,
            "title": 5,
            "description": null,
            "dependencies": ["a", { "name": "b" }, "c"],
            "files": null,
            "cssVars": null
        });
        let record = ComponentRecord::from_payload("button", raw.clone()).unwrap();
        assert_eq!(record.name, "button");
        assert_eq!(record.title, "");
        assert_eq!(record.description, "");
        assert_eq!(record.dependencies, vec!["a", "c"]);
        assert!(record.files.is_empty());
        assert!(record.css_vars.is_empty());
        assert_eq!(record.raw_data, raw);

        let record = ComponentRecord::from_payload(
            "card",
            json!({ "dependencies": null, "cssVars": ["dark"], "type": false }),
        )
        .unwrap();
        assert!(record.dependencies.is_empty());
        assert!(record.css_vars.is_empty());
        assert_eq!(record.component_type, "");
    }

    #[test]
    fn record_rejects_non_object_payload() {
        assert!(ComponentRecord::from_payload("button", json!(["not", "an", "object"])).is_err());
    }

    #[test]
    fn listing_preserves_order_and_duplicates() {
        let raw = json!({ "items": [{ "name": "card" }, { "name": "button" }, { "name": "card" }] });
        let listing = ComponentListing::from_manifest(&raw).unwrap();
        assert_eq!(listing.components, vec!["card", "button", "card"]);
    }

    #[test]
    fn listing_requires_items() {
        assert!(ComponentListing::from_manifest(&json!({ "name": "registry" })).is_err());
        assert!(ComponentListing::from_manifest(&json!({ "items": [{ "title": "x" }] })).is_err());
    }

    #[test]
    fn code_last_file_wins() {
        let raw = json!({
            "files": [
                { "name": "index.tsx", "content": "old" },
                { "name": "index.tsx", "content": "new" }
            ]
        });
        let code = ComponentCode::from_source(&raw).unwrap();
        let files: Value = serde_json::from_str(&code.content).unwrap();
        assert_eq!(files, json!({ "index.tsx": "new" }));
    }

    #[test]
    fn design_context_counts_characters() {
        let ctx = DesignContext::new("https://example.test/llms.txt", "héllo ✓".into());
        assert_eq!(ctx.length, 7);
        assert_eq!(ctx.status, STATUS_SUCCESS);
    }
}
