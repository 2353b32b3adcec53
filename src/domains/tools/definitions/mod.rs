//! Tool definitions module.
//!
//! Each tool is defined in its own file and implements [`ToolDefinition`]:
//! - name, description and typed parameters (for the MCP tool listing)
//! - `execute()` with the tool's logic
//!
//! Decoding arguments, rendering results and building the rmcp route are
//! shared by every tool through the trait's provided methods.
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod basic;
pub mod docs;
pub mod plots;

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ToolError;

pub use basic::{AddParams, AddTool, EchoParams, EchoTool};
pub use docs::{DocTitlesTool, SectionContentParams, SectionContentTool};
pub use plots::{BayesianForecastImageTool, ImageReference, PlotTypesTool};

/// Parameters for tools that take no arguments.
///
/// Unknown fields are rejected so that a client passing arguments to a
/// no-argument tool gets an error instead of silently ignored input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

/// Trait for tool definitions.
///
/// Tools are pure: `execute()` must not keep state between calls, so two
/// calls with the same parameters produce the same output.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed input parameters.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Typed result.
    type Output: Serialize;

    /// Execute the tool logic.
    fn execute(params: Self::Params) -> Result<Self::Output, ToolError>;

    /// JSON schema of the structured output, if the tool returns one.
    fn output_schema() -> Option<Arc<JsonObject>> {
        None
    }

    /// Decode raw JSON arguments into the tool's parameters.
    fn parse_params(arguments: Value) -> Result<Self::Params, ToolError> {
        serde_json::from_value(arguments).map_err(|e| {
            warn!("Rejected arguments for {}: {}", Self::NAME, e);
            ToolError::invalid_arguments(e.to_string())
        })
    }

    /// Render a successful output as an MCP tool result.
    ///
    /// Strings are sent as-is; anything else is sent as its JSON text.
    fn to_call_result(output: Self::Output) -> Result<CallToolResult, ToolError> {
        let text = match to_json(&output)? {
            Value::String(text) => text,
            other => other.to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Decode, execute and return the raw output as JSON.
    fn invoke(arguments: Value) -> Result<Value, ToolError> {
        debug!("Invoking tool {}", Self::NAME);
        let output = Self::execute(Self::parse_params(arguments)?)?;
        to_json(&output)
    }

    /// Decode, execute and render as an MCP tool result.
    fn call(arguments: Value) -> Result<CallToolResult, ToolError> {
        debug!("Calling tool {}", Self::NAME);
        let output = Self::execute(Self::parse_params(arguments)?)?;
        Self::to_call_result(output)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: Self::output_schema(),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                match Self::call(Value::Object(args)) {
                    Ok(result) => Ok(result),
                    Err(e) => e.into_call_result(),
                }
            }
            .boxed()
        })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params_accepts_empty_object() {
        assert!(DocTitlesTool::parse_params(serde_json::json!({})).is_ok());
    }

    #[test]
    fn test_no_params_rejects_extra_fields() {
        let err = DocTitlesTool::parse_params(serde_json::json!({ "x": 1 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = EchoTool::to_tool();
        assert_eq!(tool.name, "echo");
        assert_eq!(tool.description.as_deref(), Some(EchoTool::DESCRIPTION));
        assert!(tool.input_schema.contains_key("properties"));
        assert!(tool.output_schema.is_none());
    }
}
