//! Tool Registry — maps tool names to their handlers.

use crate::McpError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use zd_core::tool::{ToolDescriptor, ToolResult};

/// A callable tool exposed to MCP clients.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    fn descriptor(&self) -> ToolDescriptor;

    /// Run the tool. `Err` is reserved for protocol problems such as missing
    /// arguments; upstream failures come back inside the `ToolResult`.
    async fn call(&self, arguments: &Value) -> Result<ToolResult, McpError>;
}

/// In-memory tool registry.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Overwrites if the same name already exists.
    pub fn register(&mut self, tool: Arc<dyn ToolHandler>) {
        let name = tool.descriptor().name;
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::warn!("tool '{name}' registered twice, keeping the latest");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.tools.get(name).cloned()
    }

    /// Descriptors of all registered tools, sorted by name.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        let mut descriptors: Vec<ToolDescriptor> =
            self.tools.values().map(|t| t.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Echoes its arguments back as the result.
    pub(crate) struct EchoTool(pub &'static str);

    #[async_trait::async_trait]
    impl ToolHandler for EchoTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::without_arguments(self.0, "echo")
        }

        async fn call(&self, arguments: &Value) -> Result<ToolResult, McpError> {
            Ok(ToolResult::from_payload(&serde_json::json!({ "echo": arguments })))
        }
    }

    #[test]
    fn list_is_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool("zeta")));
        registry.register(Arc::new(EchoTool("alpha")));
        let names: Vec<String> = registry.list().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn register_overwrites() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool("echo")));
        registry.register(Arc::new(EchoTool("echo")));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("echo").is_some());
        assert!(registry.get("missing").is_none());
    }
}
