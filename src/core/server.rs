//! MCP Server implementation.
//!
//! This module contains the rmcp server handler. Tool calls are routed
//! through the tool registry and resource requests through the resource
//! service; the handler itself holds no per-request state.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    resources::ResourceService,
    tools::{ToolError, ToolRegistry, build_tool_router},
};

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Render Demo MCP server. Tools: add and echo for quick checks; \
doc_titles lists documentation sections and get_section_content returns one by title; \
plot_types lists supported plots and bayesian_forcast_image returns the forecast image path. \
Documentation sections are also available as docs://sections/ resources.";

/// The main MCP server handler.
///
/// Cloning is cheap: configuration and services are shared behind `Arc`s
/// and the tool registry is a static table.
#[derive(Clone)]
pub struct RenderDemoServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry used for name-based dispatch (HTTP transport).
    registry: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls over rmcp.
    tool_router: ToolRouter<Self>,
}

impl RenderDemoServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            registry: ToolRegistry::new(),
            resource_service: Arc::new(ResourceService::new()),
            tool_router: build_tool_router::<Self>(),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.tools()
    }

    /// Call a tool by name.
    ///
    /// Tool failures come back as a `CallToolResult` with `is_error` set;
    /// only unknown tools and undecodable arguments are protocol errors.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, McpError> {
        self.registry
            .call(name, arguments)
            .or_else(ToolError::into_call_result)
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.resource_service.list_resource_templates().await
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> crate::Result<ReadResourceResult> {
        Ok(self.resource_service.read_resource(uri).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for RenderDemoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}
