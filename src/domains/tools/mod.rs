//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are pure functions that MCP clients call by name with JSON
//! arguments.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Fixed tool table and dispatch by name
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Add it to the table in `registry.rs` and the route list in `router.rs`
//!
//! **No need to modify `server.rs`!**

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::{NoParams, ToolDefinition};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
