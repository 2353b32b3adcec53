//! Plot types tool definition.

use tracing::info;

use super::super::{NoParams, ToolDefinition};
use crate::domains::docs;
use crate::domains::tools::ToolError;

/// Plot types tool - lists the plot types supported by the demo application.
pub struct PlotTypesTool;

impl ToolDefinition for PlotTypesTool {
    const NAME: &'static str = "plot_types";
    const DESCRIPTION: &'static str = "List the supported plot types, in order.";

    type Params = NoParams;
    type Output = Vec<String>;

    fn execute(_params: NoParams) -> Result<Vec<String>, ToolError> {
        info!("Plot types tool called");
        Ok(docs::plot_types())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_types() {
        let plots = PlotTypesTool::execute(NoParams::default()).unwrap();
        assert_eq!(
            plots,
            vec![
                "Bar chart",
                "Scatter plot",
                "Histogram",
                "Grouped vertical bar chart",
                "Circle pack plot",
                "Response surface scatter plot",
                "Line plot",
                "Surface plot from unstructured data",
            ]
        );
    }

    #[test]
    fn test_plot_types_rejects_arguments() {
        assert!(PlotTypesTool::invoke(serde_json::json!({ "kind": "bar" })).is_err());
    }
}
