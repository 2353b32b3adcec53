//! Plot catalog.

/// Plot types supported by the demo application, in display order.
///
/// Clients may index into this list positionally, so the order is fixed.
pub const PLOT_TYPES: [&str; 8] = [
    "Bar chart",
    "Scatter plot",
    "Histogram",
    "Grouped vertical bar chart",
    "Circle pack plot",
    "Response surface scatter plot",
    "Line plot",
    "Surface plot from unstructured data",
];

/// Path of the pre-rendered Bayesian forecasting test-set image.
pub const BAYESIAN_FORECAST_IMAGE: &str = "bayesian_forecasting_testset.png";

/// Owned copy of [`PLOT_TYPES`].
pub fn plot_types() -> Vec<String> {
    PLOT_TYPES.iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_types_order() {
        let plots = plot_types();
        assert_eq!(plots.len(), 8);
        assert_eq!(plots[0], "Bar chart");
        assert_eq!(plots[3], "Grouped vertical bar chart");
        assert_eq!(plots[7], "Surface plot from unstructured data");
    }
}
