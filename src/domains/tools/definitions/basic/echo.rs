//! Echo tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::tools::ToolError;

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// Text to send back.
    #[schemars(description = "Text to echo back")]
    pub text: String,
}

/// Echo tool - returns its input unchanged.
pub struct EchoTool;

impl ToolDefinition for EchoTool {
    const NAME: &'static str = "echo";
    const DESCRIPTION: &'static str = "Echo text back to the caller.";

    type Params = EchoParams;
    type Output = String;

    #[instrument(skip_all, fields(len = params.text.len()))]
    fn execute(params: EchoParams) -> Result<String, ToolError> {
        info!("Echo tool called");
        Ok(params.text)
    }
}
