//! Plot tools.
//!
//! - `types`: list the supported plot types
//! - `forecast_image`: reference to the Bayesian forecasting test-set image

pub mod forecast_image;
pub mod types;

pub use forecast_image::{BayesianForecastImageTool, ImageReference};
pub use types::PlotTypesTool;
