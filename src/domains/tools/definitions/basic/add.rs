//! Add tool definition.
//!
//! A tool that adds two integers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{info, instrument};

use super::super::ToolDefinition;
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First operand.
    #[schemars(description = "First integer")]
    pub a: i64,

    /// Second operand.
    #[schemars(description = "Second integer")]
    pub b: i64,
}

// ============================================================================
// Tool Output
// ============================================================================

/// Sum of two `i64` operands, held in an `i128` so it is always exact.
///
/// Serializes as a JSON integer whenever it fits in `i64` or `u64`. The
/// remaining range (sums below `i64::MIN`) has no JSON number form in
/// `serde_json`, so those are sent as a decimal string of the same digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sum(pub i128);

impl Serialize for Sum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(value) = i64::try_from(self.0) {
            serializer.serialize_i64(value)
        } else if let Ok(value) = u64::try_from(self.0) {
            serializer.serialize_u64(value)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add tool - returns the sum of two integers.
pub struct AddTool;

impl ToolDefinition for AddTool {
    const NAME: &'static str = "add";
    const DESCRIPTION: &'static str = "Add two numbers.";

    type Params = AddParams;
    type Output = Sum;

    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    fn execute(params: AddParams) -> Result<Sum, ToolError> {
        info!("Add tool called");
        Ok(Sum(i128::from(params.a) + i128::from(params.b)))
    }
}

// ============================================================================
// Tests
// ============================================================================
