//! zd-core: Shared types for the Zendesign MCP adapter
//!
//! This crate has zero internal crate dependencies and defines the
//! wire types used by the registry client and the tool runtime.

pub mod component;
pub mod tool;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::component::{
        ComponentCode, ComponentListing, ComponentRecord, DesignContext, FileDescriptor,
        RegistryManifest,
    };
    pub use crate::tool::{ToolDescriptor, ToolResult};
}
