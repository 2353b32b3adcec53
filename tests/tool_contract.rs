//! Contract tests for the public tool registry.

use render_demo_mcp::domains::docs;
use render_demo_mcp::{ToolError, ToolRegistry};
use serde_json::{Value, json};

fn invoke(name: &str, arguments: Value) -> Result<Value, ToolError> {
    ToolRegistry::new().invoke(name, arguments)
}

#[test]
fn add_sums_integers() {
    for (a, b) in [(0, 0), (1, 2), (-3, 3), (-10, -20), (1_000_000, -1)] {
        assert_eq!(invoke("add", json!({ "a": a, "b": b })).unwrap(), json!(a + b));
    }
}

#[test]
fn echo_returns_input() {
    for text in ["", "hello", "  spaced  ", "multi\nline\ttext", "ünïcødé"] {
        assert_eq!(invoke("echo", json!({ "text": text })).unwrap(), json!(text));
    }
}

#[test]
fn doc_titles_in_declared_order() {
    assert_eq!(
        invoke("doc_titles", json!({})).unwrap(),
        json!(["Step-by-step tutorial", "Session specification", "Plots"])
    );
}

#[test]
fn plot_types_in_declared_order() {
    assert_eq!(
        invoke("plot_types", json!({})).unwrap(),
        json!([
            "Bar chart",
            "Scatter plot",
            "Histogram",
            "Grouped vertical bar chart",
            "Circle pack plot",
            "Response surface scatter plot",
            "Line plot",
            "Surface plot from unstructured data"
        ])
    );
}

#[test]
fn section_content_trims_lookup_key() {
    let plots = invoke("get_section_content", json!({ "section": "Plots" })).unwrap();
    assert_eq!(plots, json!(docs::section_content("Plots").unwrap()));

    let padded = invoke("get_section_content", json!({ "section": "  Plots  " })).unwrap();
    assert_eq!(padded, plots);
}

#[test]
fn section_content_error_uses_original_input() {
    let err = invoke("get_section_content", json!({ "section": "Nonexistent" })).unwrap_err();
    assert_eq!(err.to_string(), "Unknown section: Nonexistent");

    let err = invoke("get_section_content", json!({ "section": "  Nonexistent  " })).unwrap_err();
    assert_eq!(err, ToolError::SectionNotFound("  Nonexistent  ".to_string()));
    assert_eq!(err.to_string(), "Unknown section:   Nonexistent  ");
}

#[test]
fn every_listed_title_resolves() {
    let titles = invoke("doc_titles", json!({})).unwrap();
    for title in titles.as_array().unwrap() {
        assert!(invoke("get_section_content", json!({ "section": title })).is_ok());
    }
}

#[test]
fn forecast_image_reference() {
    assert_eq!(
        invoke("bayesian_forcast_image", json!({})).unwrap(),
        json!({ "image_url": "bayesian_forecasting_testset.png" })
    );
    assert!(matches!(
        invoke("bayesian_forcast_image", json!({ "extra": true })),
        Err(ToolError::InvalidArguments(_))
    ));
}

#[test]
fn repeated_calls_are_identical() {
    let calls = [
        ("add", json!({ "a": 7, "b": -2 })),
        ("echo", json!({ "text": "again" })),
        ("doc_titles", json!({})),
        ("plot_types", json!({})),
        ("get_section_content", json!({ "section": "Session specification" })),
        ("bayesian_forcast_image", json!({})),
    ];
    for (name, arguments) in calls {
        let first = invoke(name, arguments.clone()).unwrap();
        let second = invoke(name, arguments).unwrap();
        assert_eq!(first, second, "{name} is not idempotent");
    }
}

#[test]
fn unknown_tool_and_bad_arguments() {
    assert_eq!(
        invoke("multiply", json!({ "a": 1, "b": 2 })).unwrap_err(),
        ToolError::UnknownTool("multiply".to_string())
    );
    assert!(matches!(
        invoke("echo", json!({ "text": 5 })),
        Err(ToolError::InvalidArguments(_))
    ));
}

#[test]
fn add_never_fails_on_i64_operands() {
    assert_eq!(
        invoke("add", json!({ "a": i64::MAX, "b": 1 })).unwrap(),
        json!(9_223_372_036_854_775_808u64)
    );
    assert!(invoke("add", json!({ "a": i64::MIN, "b": i64::MIN })).is_ok());
}
