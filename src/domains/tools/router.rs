//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.
//!
//! Every tool knows how to create its own route through
//! [`ToolDefinition::create_route`]; this module only lists them.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AddTool, BayesianForecastImageTool, DocTitlesTool, EchoTool, PlotTypesTool,
    SectionContentTool, ToolDefinition,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route())
        .with_route(EchoTool::create_route())
        .with_route(DocTitlesTool::create_route())
        .with_route(PlotTypesTool::create_route())
        .with_route(SectionContentTool::create_route())
        .with_route(BayesianForecastImageTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| &*t.name).collect();
        assert!(names.contains(&"add"));
        assert!(names.contains(&"echo"));
        assert!(names.contains(&"doc_titles"));
        assert!(names.contains(&"plot_types"));
        assert!(names.contains(&"get_section_content"));
        assert!(names.contains(&"bayesian_forcast_image"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::new().tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| &*t.name).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
