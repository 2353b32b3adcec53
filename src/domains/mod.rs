//! Domains module containing business logic organized by bounded contexts.
//!
//! - **docs**: static documentation content and plot catalog
//! - **tools**: the tool registry clients call into
//! - **resources**: documentation sections exposed as MCP resources

pub mod docs;
pub mod resources;
pub mod tools;
