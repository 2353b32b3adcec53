//! Documentation tools.
//!
//! - `titles`: list the documentation section titles
//! - `section`: fetch the body of one section

pub mod section;
pub mod titles;

pub use section::{SectionContentParams, SectionContentTool};
pub use titles::DocTitlesTool;
