//! Tool contract — what the hosting runtime advertises and what every call returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// ToolDescriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Name the host uses to invoke the tool.
    pub name: String,

    /// What this tool does.
    pub description: String,

    /// JSON Schema of the `arguments` object.
    pub input_schema: Value,
}

impl ToolDescriptor {
    /// A tool that takes no arguments.
    pub fn without_arguments(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    /// A tool with a single required string argument.
    pub fn with_string_argument(
        name: impl Into<String>,
        description: impl Into<String>,
        argument: &str,
        argument_description: &str,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    argument: {
                        "type": "string",
                        "description": argument_description
                    }
                },
                "required": [argument]
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ToolResult
// ---------------------------------------------------------------------------

/// The uniform envelope every tool call returns.
///
/// A result is a failure exactly when it carries an `error` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolResult(Map<String, Value>);

impl ToolResult {
    /// Serialize a success payload. Payloads that do not serialize to a JSON
    /// object are reported as failures.
    pub fn from_payload<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(Value::Object(map)) => Self(map),
            Ok(other) => Self::error(format!("Result is not a JSON object: {other}")),
            Err(e) => Self::error(format!("Error serializing result: {e}")),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("error".into(), Value::String(message.into()));
        Self(map)
    }

    /// Add or replace a field.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.0.contains_key("error")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope() {
        let result = ToolResult::error("boom").with("status", "error");
        assert!(result.is_error());
        assert_eq!(result.into_value(), json!({ "error": "boom", "status": "error" }));
    }

    #[test]
    fn payload_envelope_is_not_error() {
        let result = ToolResult::from_payload(&json!({ "content": "x", "status": "success" }));
        assert!(!result.is_error());
        assert_eq!(result.get("content"), Some(&json!("x")));
    }

    #[test]
    fn non_object_payload_becomes_error() {
        let result = ToolResult::from_payload(&vec![1, 2, 3]);
        assert!(result.is_error());
    }

    #[test]
    fn string_argument_schema() {
        let tool = ToolDescriptor::with_string_argument("t", "d", "component_name", "name");
        assert_eq!(tool.input_schema["required"], json!(["component_name"]));
        assert_eq!(tool.input_schema["properties"]["component_name"]["type"], "string");
        let wire = serde_json::to_value(&tool).unwrap();
        assert!(wire.get("inputSchema").is_some());
    }
}
