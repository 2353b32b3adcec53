//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed, build-time table of available tools
//! - Dispatch of a tool call by name
//! - Tool metadata for listing
//!
//! The table is a `static` of function pointers, so there is nothing to
//! initialise or lock at runtime.

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use super::definitions::{
    AddTool, BayesianForecastImageTool, DocTitlesTool, EchoTool, PlotTypesTool,
    SectionContentTool, ToolDefinition,
};
use super::error::ToolError;

// ============================================================================
// Registry Table
// ============================================================================

/// One registered tool, type-erased into plain function pointers.
struct ToolEntry {
    name: &'static str,
    tool: fn() -> Tool,
    invoke: fn(Value) -> Result<Value, ToolError>,
    call: fn(Value) -> Result<CallToolResult, ToolError>,
}

const fn entry<T: ToolDefinition>() -> ToolEntry {
    ToolEntry {
        name: T::NAME,
        tool: T::to_tool,
        invoke: T::invoke,
        call: T::call,
    }
}

/// All tools, in the order they are listed to clients.
static TOOLS: [ToolEntry; 6] = [
    entry::<AddTool>(),
    entry::<EchoTool>(),
    entry::<DocTitlesTool>(),
    entry::<PlotTypesTool>(),
    entry::<SectionContentTool>(),
    entry::<BayesianForecastImageTool>(),
];

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the catalog of callable tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Invoking a tool by name with JSON arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a handle to the tool registry.
    pub const fn new() -> Self {
        Self
    }

    /// Get all tool names, in listing order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        TOOLS.iter().map(|t| t.name).collect()
    }

    /// Check whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }

    /// Get all tools as Tool models (metadata), in listing order.
    pub fn tools(&self) -> Vec<Tool> {
        TOOLS.iter().map(|t| (t.tool)()).collect()
    }

    /// Invoke a tool by name and return its raw output as JSON.
    ///
    /// Arguments are decoded into the tool's typed parameters first; a
    /// mismatch is reported as [`ToolError::InvalidArguments`] without
    /// running the tool.
    pub fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        (self.find(name)?.invoke)(arguments)
    }

    /// Invoke a tool by name and render the output as an MCP tool result.
    pub fn call(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        (self.find(name)?.call)(arguments)
    }

    fn find(&self, name: &str) -> Result<&'static ToolEntry, ToolError> {
        TOOLS.iter().find(|t| t.name == name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::unknown_tool(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::new().tool_names();
        assert_eq!(
            names,
            vec![
                "add",
                "echo",
                "doc_titles",
                "plot_types",
                "get_section_content",
                "bayesian_forcast_image",
            ]
        );
    }

    #[test]
    fn test_registry_names_unique() {
        let names = ToolRegistry::new().tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_tools_metadata_matches_names() {
        let registry = ToolRegistry::new();
        let tools = registry.tools();
        let names: Vec<_> = tools.iter().map(|t| &*t.name).collect();
        assert_eq!(names, registry.tool_names());
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[test]
    fn test_registry_invoke() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.invoke("add", json!({ "a": 1, "b": 2 })).unwrap(), json!(3));
        assert_eq!(
            registry.invoke("echo", json!({ "text": "hi" })).unwrap(),
            json!("hi")
        );
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new();
        let err = registry.invoke("unknown", json!({})).unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("unknown".to_string()));
        assert!(registry.call("unknown", json!({})).is_err());
        assert!(!registry.contains("unknown"));
        assert!(registry.contains("echo"));
    }

    #[test]
    fn test_registry_propagates_section_error() {
        let err = ToolRegistry::new()
            .invoke("get_section_content", json!({ "section": "  Nonexistent  " }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown section:   Nonexistent  ");
    }
}
