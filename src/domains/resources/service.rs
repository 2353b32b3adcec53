//! Resource service implementation.
//!
//! The ResourceService lists the section resources and serves read
//! requests for them. Entries are built once from the registry and never
//! change afterwards.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{info, warn};

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The resource body, served verbatim.
    pub body: &'static str,
}

impl ResourceService {
    /// Create a new ResourceService populated from the registry.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources();
        for entry in &resources {
            info!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self {
            resources,
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| {
                warn!("Unknown resource requested: {}", uri);
                ResourceError::not_found(uri)
            })?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(entry.body, uri)],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
