//! Resources domain module.
//!
//! Publishes the documentation sections as MCP resources, so clients that
//! browse resources can read them without a tool call.
//!
//! ## Architecture
//!
//! - `registry.rs` - Builds one resource per documentation section
//! - `service.rs` - Resource service for listing and reading
//! - `error.rs` - Resource-specific error types

mod error;
mod registry;
mod service;

pub use error::ResourceError;
pub use registry::{SECTION_URI_PREFIX, get_all_resource_templates, get_all_resources, section_uri};
pub use service::{ResourceEntry, ResourceService};
