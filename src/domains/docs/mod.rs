//! Documentation domain.
//!
//! Holds the static documentation served by the tools and resources domains:
//! the section content table, the list of supported plot types and the
//! reference to the pre-rendered forecasting image.
//!
//! Everything here is a build-time literal. Nothing is read from disk and
//! nothing is mutated after start-up, so the data can be shared freely
//! between concurrent requests.

mod content;
mod plots;

pub use content::{SECTION_CONTENT, doc_titles, section_content, sections};
pub use plots::{BAYESIAN_FORECAST_IMAGE, PLOT_TYPES, plot_types};
