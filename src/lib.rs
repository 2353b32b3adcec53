//! Render Demo MCP Server Library
//!
//! A small Model Context Protocol (MCP) server exposing a fixed set of tools:
//! integer addition, echo, documentation section lookup, the list of
//! supported plot types and a reference to a pre-rendered forecast image.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and
//!   the transports (stdio, tcp, http)
//! - **domains**: business logic organized by bounded contexts
//!   - **docs**: static documentation content and plot catalog
//!   - **tools**: the tool registry clients call into
//!   - **resources**: documentation sections exposed as MCP resources
//!
//! # Example
//!
//! ```rust
//! use render_demo_mcp::domains::tools::ToolRegistry;
//! use serde_json::json;
//!
//! let registry = ToolRegistry::new();
//! assert_eq!(registry.invoke("add", json!({ "a": 2, "b": 3 })).unwrap(), json!(5));
//!
//! let err = registry
//!     .invoke("get_section_content", json!({ "section": "Nonexistent" }))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Unknown section: Nonexistent");
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, RenderDemoServer, Result};
pub use domains::tools::{ToolError, ToolRegistry};
