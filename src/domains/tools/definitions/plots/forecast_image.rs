//! Bayesian forecast image tool definition.
//!
//! Returns a structured record pointing at the pre-rendered test-set image.
//! The record is also advertised as the tool's output schema so clients can
//! read `structuredContent` directly.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::super::{NoParams, ToolDefinition};
use crate::domains::docs::BAYESIAN_FORECAST_IMAGE;
use crate::domains::tools::ToolError;

/// Structured output: a reference to an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageReference {
    /// Path of the image, relative to the demo application's working directory.
    pub image_url: String,
}

/// Bayesian forecast image tool.
pub struct BayesianForecastImageTool;

impl ToolDefinition for BayesianForecastImageTool {
    // Name kept as published; clients already call it with this spelling.
    const NAME: &'static str = "bayesian_forcast_image";
    const DESCRIPTION: &'static str =
        "Get the image showing Bayesian forecasting results on the test set.";

    type Params = NoParams;
    type Output = ImageReference;

    fn execute(_params: NoParams) -> Result<ImageReference, ToolError> {
        info!("Bayesian forecast image tool called");
        Ok(ImageReference {
            image_url: BAYESIAN_FORECAST_IMAGE.to_string(),
        })
    }

    fn output_schema() -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<ImageReference>())
    }

    fn to_call_result(output: ImageReference) -> Result<CallToolResult, ToolError> {
        let value =
            serde_json::to_value(output).map_err(|e| ToolError::internal(e.to_string()))?;
        Ok(CallToolResult::structured(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference() {
        let value = BayesianForecastImageTool::invoke(serde_json::json!({})).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "image_url": "bayesian_forecasting_testset.png" })
        );
    }

    #[test]
    fn test_structured_content() {
        let result = BayesianForecastImageTool::call(serde_json::json!({})).unwrap();
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "image_url": "bayesian_forecasting_testset.png" }))
        );
    }

    #[test]
    fn test_output_schema_advertised() {
        let tool = BayesianForecastImageTool::to_tool();
        let schema = tool.output_schema.expect("output schema");
        assert!(
            schema
                .get("properties")
                .and_then(|p| p.get("image_url"))
                .is_some()
        );
    }

    #[test]
    fn test_rejects_arguments() {
        let err = BayesianForecastImageTool::invoke(serde_json::json!({ "size": 2 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
