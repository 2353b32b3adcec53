//! Resource Registry - one resource per documentation section.
//!
//! Section URIs are derived from titles: `Step-by-step tutorial` becomes
//! `docs://sections/step-by-step-tutorial`.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::service::ResourceEntry;
use crate::domains::docs;

/// URI prefix shared by all section resources.
pub const SECTION_URI_PREFIX: &str = "docs://sections/";

const SECTION_MIME_TYPE: &str = "text/markdown";

/// Lowercase a title and collapse every run of non-alphanumerics into `-`.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Resource URI for a section title.
pub fn section_uri(title: &str) -> String {
    format!("{}{}", SECTION_URI_PREFIX, slugify(title))
}

/// Get all section resources, in `doc_titles` order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    docs::sections()
        .map(|(title, body)| {
            let mut raw = RawResource::new(section_uri(title), title);
            raw.description = Some(format!("Documentation section: {}", title));
            raw.mime_type = Some(SECTION_MIME_TYPE.to_string());
            raw.size = u32::try_from(body.len()).ok();

            ResourceEntry {
                resource: raw.no_annotation(),
                body,
            }
        })
        .collect()
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: format!("{}{{slug}}", SECTION_URI_PREFIX),
            name: "Documentation Sections".to_string(),
            title: Some("Documentation Sections".to_string()),
            description: Some(
                "Read a documentation section by its slug (the lowercased title with dashes)"
                    .to_string(),
            ),
            mime_type: Some(SECTION_MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Step-by-step tutorial"), "step-by-step-tutorial");
        assert_eq!(slugify("Session specification"), "session-specification");
        assert_eq!(slugify("Plots"), "plots");
        assert_eq!(slugify("  A -- b  "), "a-b");
    }

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 3);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(
            uris,
            vec![
                "docs://sections/step-by-step-tutorial",
                "docs://sections/session-specification",
                "docs://sections/plots",
            ]
        );
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "docs://sections/{slug}");
    }
}
