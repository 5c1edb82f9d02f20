//! Folding operation outcomes into tool results.
//!
//! Each registry operation has its own failure shape; callers distinguish
//! success from failure by the presence of an `error` key.

use crate::RegistryError;
use zd_core::component::{
    ComponentCode, ComponentListing, ComponentRecord, DesignContext, STATUS_ERROR,
};
use zd_core::tool::ToolResult;

/// Hint attached when a component cannot be fetched.
pub const COMPONENT_NAME_HINT: &str =
    "Make sure the component name is correct (e.g., 'button', 'card', 'input')";

pub fn component_info(
    component_name: &str,
    outcome: Result<ComponentRecord, RegistryError>,
) -> ToolResult {
    match outcome {
        Ok(record) => ToolResult::from_payload(&record),
        Err(RegistryError::Transport(cause)) => ToolResult::error(format!(
            "Failed to fetch component '{component_name}': {cause}"
        ))
        .with("available_hint", COMPONENT_NAME_HINT),
        Err(RegistryError::Processing(cause)) => {
            ToolResult::error(format!("Error processing component data: {cause}"))
        }
    }
}

pub fn design_context(outcome: Result<DesignContext, RegistryError>) -> ToolResult {
    let message = match outcome {
        Ok(ctx) => return ToolResult::from_payload(&ctx),
        Err(RegistryError::Transport(cause)) => format!("Failed to fetch llms.txt: {cause}"),
        Err(RegistryError::Processing(cause)) => format!("Error processing llms.txt: {cause}"),
    };
    ToolResult::error(message)
        .with("content", "")
        .with("status", STATUS_ERROR)
}

/// Only the processing branch carries an empty `components` list.
pub fn component_listing(outcome: Result<ComponentListing, RegistryError>) -> ToolResult {
    match outcome {
        Ok(listing) => ToolResult::from_payload(&listing),
        Err(RegistryError::Transport(cause)) => {
            ToolResult::error(format!("Failed to fetch registry: {cause}"))
                .with("status", STATUS_ERROR)
        }
        Err(RegistryError::Processing(cause)) => {
            ToolResult::error(format!("Error processing registry: {cause}"))
                .with("components", Vec::<String>::new())
                .with("status", STATUS_ERROR)
        }
    }
}

pub fn component_code(
    component_name: &str,
    outcome: Result<ComponentCode, RegistryError>,
) -> ToolResult {
    let message = match outcome {
        Ok(code) => return ToolResult::from_payload(&code),
        Err(RegistryError::Transport(cause)) => {
            format!("Failed to fetch component code '{component_name}': {cause}")
        }
        Err(RegistryError::Processing(cause)) => {
            format!("Error processing component code: {cause}")
        }
    };
    ToolResult::error(message).with("status", STATUS_ERROR)
}
