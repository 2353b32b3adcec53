//! Section content tool definition.
//!
//! Looks up one documentation section by title. This is the only tool with a
//! failure path: an unknown title yields [`ToolError::SectionNotFound`].

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::super::ToolDefinition;
use crate::domains::docs;
use crate::domains::tools::ToolError;

/// Parameters for the section content tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SectionContentParams {
    /// Section title, as returned by `doc_titles`.
    #[schemars(description = "Section title, as returned by doc_titles")]
    pub section: String,
}

/// Section content tool - returns the markdown body of a section.
pub struct SectionContentTool;

impl ToolDefinition for SectionContentTool {
    const NAME: &'static str = "get_section_content";
    const DESCRIPTION: &'static str = "Get the content of a documentation section by its title. Surrounding whitespace in the title is ignored; matching is otherwise exact.";

    type Params = SectionContentParams;
    type Output = &'static str;

    #[instrument(skip_all, fields(section = %params.section))]
    fn execute(params: SectionContentParams) -> Result<&'static str, ToolError> {
        info!("Section content tool called");

        // The error reports the caller's original string, not the trimmed key.
        docs::section_content(params.section.trim()).ok_or_else(|| {
            warn!("Unknown section requested: {:?}", params.section);
            ToolError::section_not_found(params.section)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn lookup(section: &str) -> Result<&'static str, ToolError> {
        SectionContentTool::execute(SectionContentParams {
            section: section.to_string(),
        })
    }

    #[test]
    fn test_known_section() {
        let body = lookup("Plots").unwrap();
        assert_eq!(Some(body), docs::section_content("Plots"));
        assert!(body.contains("Bar chart"));
    }

    #[test]
    fn test_trims_before_lookup() {
        assert_eq!(lookup("  Plots  ").unwrap(), lookup("Plots").unwrap());
        assert_eq!(
            lookup("\tSession specification\n").unwrap(),
            lookup("Session specification").unwrap()
        );
    }

    #[test]
    fn test_unknown_section_message() {
        let err = lookup("Nonexistent").unwrap_err();
        assert_eq!(err, ToolError::SectionNotFound("Nonexistent".to_string()));
        assert_eq!(err.to_string(), "Unknown section: Nonexistent");
    }

    #[test]
    fn test_unknown_section_reports_untrimmed_input() {
        let err = lookup("  Nonexistent  ").unwrap_err();
        assert_eq!(err.to_string(), "Unknown section:   Nonexistent  ");
    }

    #[test]
    fn test_no_case_folding() {
        assert!(lookup("plots").is_err());
        assert!(lookup("PLOTS").is_err());
        assert!(lookup("Plot").is_err());
    }

    #[test]
    fn test_every_title_resolves() {
        for title in docs::doc_titles() {
            assert!(lookup(&title).is_ok(), "title {title} did not resolve");
        }
    }

    #[test]
    fn test_call_unknown_section_is_error_result() {
        let err = SectionContentTool::call(serde_json::json!({ "section": "Nope" })).unwrap_err();
        let result = err.into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Unknown section: Nope"),
            _ => panic!("Expected text content"),
        }
    }
}
