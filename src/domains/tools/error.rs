//! Tool-specific error types.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// A documentation section lookup found no entry.
    ///
    /// Carries the section name exactly as the caller supplied it, before
    /// any trimming.
    #[error("Unknown section: {0}")]
    SectionNotFound(String),

    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "section not found" error.
    pub fn section_not_found(section: impl Into<String>) -> Self {
        Self::SectionNotFound(section.into())
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into the MCP response for a failed tool call.
    ///
    /// Failures raised by a tool while executing become a `CallToolResult`
    /// flagged `isError`, so the client sees the message. Failures to reach
    /// a tool at all (bad name, bad arguments) are protocol errors.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            Self::SectionNotFound(_) => Ok(CallToolResult::error(vec![Content::text(
                self.to_string(),
            )])),
            Self::UnknownTool(_) | Self::InvalidArguments(_) => {
                Err(McpError::invalid_params(self.to_string(), None))
            }
            Self::Internal(_) => Err(McpError::internal_error(self.to_string(), None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_section_not_found_message() {
        let err = ToolError::section_not_found("  Nonexistent  ");
        assert_eq!(err.to_string(), "Unknown section:   Nonexistent  ");
    }

    #[test]
    fn test_section_not_found_is_tool_result() {
        let result = ToolError::section_not_found("Nope").into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Unknown section: Nope"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_unknown_tool_is_protocol_error() {
        let err = ToolError::unknown_tool("nope").into_call_result().unwrap_err();
        assert_eq!(err.message, "Unknown tool: nope");
    }
}
