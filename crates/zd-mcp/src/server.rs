//! MCP protocol server — exposes registered tools to external clients via JSON-RPC.

use crate::protocol::{
    McpRequest, McpResponse, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION,
};
use crate::registry::ToolRegistry;
use crate::McpError;
use serde_json::{json, Value};

/// Name advertised in `serverInfo`.
pub const SERVER_NAME: &str = "Oraczen-Zendesign-MCP";

/// MCP Server that exposes tools to external MCP clients.
///
/// Holds no per-client state; one instance is shared by every session.
pub struct McpServer {
    tools: ToolRegistry,
    name: String,
    version: String,
}

impl McpServer {
    pub fn new(name: &str, version: &str, tools: ToolRegistry) -> Self {
        Self {
            tools,
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse and handle one raw JSON-RPC message. Returns `None` for
    /// notifications.
    pub async fn handle_message(&self, raw: &str) -> Option<McpResponse> {
        match serde_json::from_str::<McpRequest>(raw) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Some(McpResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            )),
        }
    }

    /// Handle an incoming JSON-RPC request and return a response.
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        let Some(id) = request.id.clone() else {
            tracing::debug!(method = %request.method, "notification");
            return None;
        };
        if request.jsonrpc != "2.0" {
            return Some(McpResponse::error(
                id,
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        tracing::debug!(method = %request.method, "request");
        let response = match request.method.as_str() {
            "initialize" => McpResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": { "listChanged": false }
                    },
                    "serverInfo": {
                        "name": self.name,
                        "version": self.version,
                    }
                }),
            ),
            "ping" => McpResponse::success(id, json!({})),
            "tools/list" => McpResponse::success(id, json!({ "tools": self.tools.list() })),
            "tools/call" => self.call_tool(id, &request.params).await,
            other => McpResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
        };
        Some(response)
    }

    async fn call_tool(&self, id: Value, params: &Value) -> McpResponse {
        let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
            return McpResponse::error(id, INVALID_PARAMS, "Missing tool name".into());
        };
        let Some(tool) = self.tools.get(tool_name) else {
            let e = McpError::ToolNotFound(tool_name.into());
            return McpResponse::error(id, e.code(), e.to_string());
        };
        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => json!({}),
            Some(args) => args.clone(),
        };

        tracing::info!(tool = tool_name, "tools/call");
        match tool.call(&arguments).await {
            Ok(result) => {
                let is_error = result.is_error();
                if is_error {
                    tracing::warn!(tool = tool_name, "tool returned an error result");
                }
                let structured = result.into_value();
                McpResponse::success(
                    id,
                    json!({
                        "content": [{
                            "type": "text",
                            "text": structured.to_string()
                        }],
                        "structuredContent": structured,
                        "isError": is_error
                    }),
                )
            }
            Err(e) => McpResponse::error(id, e.code(), e.to_string()),
        }
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::EchoTool;
    use std::sync::Arc;

    fn server() -> McpServer {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(EchoTool("echo")));
        McpServer::new(SERVER_NAME, "0.1.0", tools)
    }

    #[tokio::test]
    async fn initialize_request() {
        let resp = server()
            .handle_request(McpRequest::new(1, "initialize", json!({})))
            .await
            .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert!(resp.error.is_none());
    }

    #[tokio::test]
    async fn tools_list() {
        let resp = server()
            .handle_request(McpRequest::new(2, "tools/list", json!({})))
            .await
            .unwrap();
        let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "echo");
        assert!(tools[0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn tools_call_wraps_result() {
        let resp = server()
            .handle_request(McpRequest::new(
                3,
                "tools/call",
                json!({ "name": "echo", "arguments": { "x": 1 } }),
            ))
            .await
            .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result["structuredContent"], json!({ "echo": { "x": 1 } }));
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert_eq!(serde_json::from_str::<Value>(text).unwrap(), result["structuredContent"]);
    }

    #[tokio::test]
    async fn unknown_tool_is_invalid_params() {
        let resp = server()
            .handle_request(McpRequest::new(4, "tools/call", json!({ "name": "nope" })))
            .await
            .unwrap();
        let error = resp.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert_eq!(error.message, "tool not found: nope");
    }

    #[tokio::test]
    async fn unknown_method() {
        let resp = server()
            .handle_request(McpRequest::new(5, "resources/list", json!({})))
            .await
            .unwrap();
        assert_eq!(resp.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn notifications_get_no_response() {
        let resp = server()
            .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(resp.is_none());
    }

    #[tokio::test]
    async fn garbage_is_parse_error() {
        let resp = server().handle_message("{not json").await.unwrap();
        assert_eq!(resp.id, Value::Null);
        assert_eq!(resp.error.unwrap().code, PARSE_ERROR);
    }
}
