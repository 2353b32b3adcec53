//! Documentation titles tool definition.

use tracing::info;

use super::super::{NoParams, ToolDefinition};
use crate::domains::docs;
use crate::domains::tools::ToolError;

/// Documentation titles tool - lists the available section titles.
pub struct DocTitlesTool;

impl ToolDefinition for DocTitlesTool {
    const NAME: &'static str = "doc_titles";
    const DESCRIPTION: &'static str = "List the titles of the available documentation sections, in order. Pass a title to get_section_content to read that section.";

    type Params = NoParams;
    type Output = Vec<String>;

    fn execute(_params: NoParams) -> Result<Vec<String>, ToolError> {
        info!("Doc titles tool called");
        Ok(docs::doc_titles())
    }
}
