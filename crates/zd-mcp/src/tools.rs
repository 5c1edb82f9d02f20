//! Registry tools — the Zendesign operations exposed over MCP.

use crate::registry::{ToolHandler, ToolRegistry};
use crate::McpError;
use serde_json::Value;
use std::sync::Arc;
use zd_core::tool::{ToolDescriptor, ToolResult};
use zd_registry::{envelope, RegistryClient};

pub const GET_COMPONENT_INFO: &str = "get_component_info";
pub const GET_LLMS_TEXT: &str = "get_llms_text";
/// Misspelled on purpose: existing hosts call the tool by this name.
pub const GET_AVAIALBLE_COMPONENTS: &str = "get_avaialble_components";
pub const GET_AVAILABLE_COMPONENTS: &str = "get_available_components";
pub const GET_COMPONENT_CODE: &str = "get_component_code";

const COMPONENT_NAME: &str = "component_name";
const COMPONENT_NAME_DESCRIPTION: &str =
    "The name of the component (e.g., 'button', 'card', 'input')";

/// Register every registry tool against a shared client.
pub fn register_registry_tools(registry: &mut ToolRegistry, client: RegistryClient) {
    registry.register(Arc::new(ComponentInfoTool {
        client: client.clone(),
    }));
    registry.register(Arc::new(LlmsTextTool {
        client: client.clone(),
    }));
    registry.register(Arc::new(AvailableComponentsTool {
        client: client.clone(),
        name: GET_AVAIALBLE_COMPONENTS,
    }));
    registry.register(Arc::new(AvailableComponentsTool {
        client: client.clone(),
        name: GET_AVAILABLE_COMPONENTS,
    }));
    registry.register(Arc::new(ComponentCodeTool { client }));
}

fn component_name(arguments: &Value) -> Result<&str, McpError> {
    match arguments.get(COMPONENT_NAME) {
        Some(Value::String(name)) => Ok(name.as_str()),
        Some(other) => Err(McpError::InvalidParams(format!(
            "'{COMPONENT_NAME}' must be a string, got {other}"
        ))),
        None => Err(McpError::InvalidParams(format!(
            "missing required argument '{COMPONENT_NAME}'"
        ))),
    }
}

// ---------------------------------------------------------------------------
// get_component_info
// ---------------------------------------------------------------------------

pub struct ComponentInfoTool {
    client: RegistryClient,
}

#[async_trait::async_trait]
impl ToolHandler for ComponentInfoTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::with_string_argument(
            GET_COMPONENT_INFO,
            "Get component information from the Zendesign design system. Returns the \
             component schema, dependencies, files, and styling information.",
            COMPONENT_NAME,
            COMPONENT_NAME_DESCRIPTION,
        )
    }

    async fn call(&self, arguments: &Value) -> Result<ToolResult, McpError> {
        let name = component_name(arguments)?;
        let outcome = self.client.fetch_component_info(name).await;
        Ok(envelope::component_info(name, outcome))
    }
}

// ---------------------------------------------------------------------------
// get_llms_text
// ---------------------------------------------------------------------------

pub struct LlmsTextTool {
    client: RegistryClient,
}

#[async_trait::async_trait]
impl ToolHandler for LlmsTextTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::without_arguments(
            GET_LLMS_TEXT,
            "Get the llms.txt content from Zendesign for full design system context.",
        )
    }

    async fn call(&self, _arguments: &Value) -> Result<ToolResult, McpError> {
        Ok(envelope::design_context(
            self.client.fetch_design_system_context().await,
        ))
    }
}

// ---------------------------------------------------------------------------
// get_avaialble_components / get_available_components
// ---------------------------------------------------------------------------

pub struct AvailableComponentsTool {
    client: RegistryClient,
    name: &'static str,
}

#[async_trait::async_trait]
impl ToolHandler for AvailableComponentsTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::without_arguments(
            self.name,
            "List the names of all components available in the Zendesign registry.",
        )
    }

    async fn call(&self, _arguments: &Value) -> Result<ToolResult, McpError> {
        Ok(envelope::component_listing(
            self.client.list_available_components().await,
        ))
    }
}

// ---------------------------------------------------------------------------
// get_component_code
// ---------------------------------------------------------------------------

pub struct ComponentCodeTool {
    client: RegistryClient,
}

#[async_trait::async_trait]
impl ToolHandler for ComponentCodeTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::with_string_argument(
            GET_COMPONENT_CODE,
            "Get the source code of a Zendesign component as a JSON object mapping \
             file names to file contents.",
            COMPONENT_NAME,
            COMPONENT_NAME_DESCRIPTION,
        )
    }

    async fn call(&self, arguments: &Value) -> Result<ToolResult, McpError> {
        let name = component_name(arguments)?;
        let outcome = self.client.fetch_component_code(name).await;
        Ok(envelope::component_code(name, outcome))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::time::Duration;
    use zd_registry::RegistryConfig;

    pub(crate) async fn spawn_upstream() -> String {
        let router = Router::new()
            .route(
                "/r/card.json",
                get(|| async { Json(json!({ "name": "card", "title": "Card" })) }),
            )
            .route(
                "/r/registry.json",
                get(|| async {
                    Json(json!({ "items": [{ "name": "button" }, { "name": "card" }] }))
                }),
            )
            .route(
                "/r/e/card.json",
                get(|| async {
                    Json(json!({
                        "files": [
                            { "name": "index.tsx", "content": "X" },
                            { "name": "style.css", "content": "Y" }
                        ]
                    }))
                }),
            )
            .route("/llms.txt", get(|| async { "Zendesign guidelines" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub(crate) fn registry_for(base_url: &str) -> ToolRegistry {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let config = RegistryConfig::new(base_url, Duration::from_secs(5));
        let client = RegistryClient::with_http_client(config, http).unwrap();
        let mut registry = ToolRegistry::new();
        register_registry_tools(&mut registry, client);
        registry
    }

    #[test]
    fn registers_both_listing_names() {
        let registry = registry_for("http://127.0.0.1:9");
        let names: Vec<String> = registry.list().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                GET_AVAIALBLE_COMPONENTS,
                GET_AVAILABLE_COMPONENTS,
                GET_COMPONENT_CODE,
                GET_COMPONENT_INFO,
                GET_LLMS_TEXT,
            ]
        );
    }

    #[tokio::test]
    async fn component_name_is_required() {
        let registry = registry_for("http://127.0.0.1:9");
        let tool = registry.get(GET_COMPONENT_INFO).unwrap();
        let err = tool.call(&json!({})).await.unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
        let err = tool.call(&json!({ "component_name": 3 })).await.unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
    }

    #[tokio::test]
    async fn tools_return_envelopes() {
        let base = spawn_upstream().await;
        let registry = registry_for(&base);

        let info = registry
            .get(GET_COMPONENT_INFO)
            .unwrap()
            .call(&json!({ "component_name": "card" }))
            .await
            .unwrap();
        assert_eq!(info.get("title"), Some(&json!("Card")));

        let listing = registry
            .get(GET_AVAIALBLE_COMPONENTS)
            .unwrap()
            .call(&json!({}))
            .await
            .unwrap();
        assert_eq!(
            listing.into_value(),
            json!({ "components": ["button", "card"], "status": "success" })
        );

        let code = registry
            .get(GET_COMPONENT_CODE)
            .unwrap()
            .call(&json!({ "component_name": "card" }))
            .await
            .unwrap();
        let content = code.get("content").and_then(Value::as_str).unwrap();
        let files: Value = serde_json::from_str(content).unwrap();
        assert_eq!(files, json!({ "index.tsx": "X", "style.css": "Y" }));

        let llms = registry.get(GET_LLMS_TEXT).unwrap().call(&json!({})).await.unwrap();
        assert_eq!(llms.get("length"), Some(&json!(20)));
        assert_eq!(llms.get("status"), Some(&json!("success")));
    }

    #[tokio::test]
    async fn unknown_component_carries_hint() {
        let base = spawn_upstream().await;
        let registry = registry_for(&base);

        let result = registry
            .get(GET_COMPONENT_INFO)
            .unwrap()
            .call(&json!({ "component_name": "nope" }))
            .await
            .unwrap();
        assert!(result.is_error());
        assert!(result.contains_key("available_hint"));
    }
}
