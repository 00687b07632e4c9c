//! Tool Registry Tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wydln_domain::value_objects::JsonObject;
use wydln_domain::{Error, Result, Tool, ToolArguments};
use wydln_server::ToolRegistry;
use wydln_server::handlers::get_user::TOOL_NAME;
use wydln_server::tools::builtin_tools;

use crate::test_utils::FixedTool;

#[test]
fn test_list_descriptors_keeps_registration_order() {
    let names = ["zeta", "alpha", "mid"];
    let registry =
        ToolRegistry::initialize(names.iter().map(|n| FixedTool::ok(n, "").shared())).unwrap();

    let listed: Vec<_> = registry
        .list_descriptors()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(listed, names);
    assert_eq!(registry.names(), names);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_get_returns_the_registered_instance() {
    let tool = FixedTool::ok("one", "").shared();
    let registry = ToolRegistry::initialize([Arc::clone(&tool)]).unwrap();

    let found = registry.get("one").expect("registered tool");
    assert!(Arc::ptr_eq(&found, &tool));
    assert!(registry.get("two").is_none());
    assert!(registry.get("ONE").is_none());
}

#[test]
fn test_duplicate_names_are_rejected() {
    let mut registry = ToolRegistry::new();
    registry.register(FixedTool::ok("dup", "first").shared()).unwrap();

    let err = registry
        .register(FixedTool::ok("dup", "second").shared())
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateTool { ref name } if name == "dup"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_initialize_fails_on_duplicate() {
    let result = ToolRegistry::initialize([
        FixedTool::ok("a", "").shared(),
        FixedTool::ok("a", "").shared(),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_empty_name_is_rejected() {
    let mut registry = ToolRegistry::new();
    let err = registry.register(FixedTool::ok("", "").shared()).unwrap_err();

    assert!(matches!(err, Error::InvalidTool { .. }));
    assert!(registry.is_empty());
}

#[test]
fn test_non_object_schema_is_rejected() {
    let mut registry = ToolRegistry::new();
    let tool = FixedTool::ok("scalar", "").with_schema_type("string").shared();

    assert!(matches!(
        registry.register(tool),
        Err(Error::InvalidTool { .. })
    ));
}

#[test]
fn test_descriptor_includes_dependencies() {
    let registry = ToolRegistry::initialize([FixedTool::ok("dependent", "")
        .with_dependencies(&["toolA", "toolB"])
        .shared()])
    .unwrap();

    let description = &registry.descriptor("dependent").unwrap().description;
    let a = description.find("toolA").unwrap();
    let b = description.find("toolB").unwrap();
    assert!(description.starts_with("Fixed output tool"));
    assert!(a < b);
}

#[test]
fn test_definitions_are_keyed_by_name() {
    let registry = ToolRegistry::initialize([
        FixedTool::ok("a", "").shared(),
        FixedTool::ok("b", "").shared(),
    ])
    .unwrap();

    let definitions = registry.definitions();
    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions["b"].name, "b");
}

#[test]
fn test_builtin_tools_register_cleanly() {
    let registry = ToolRegistry::initialize(builtin_tools()).unwrap();

    assert_eq!(registry.names(), [TOOL_NAME]);
    let descriptor = registry.descriptor(TOOL_NAME).unwrap();
    assert_eq!(descriptor.description, "Search user information");
    assert_eq!(descriptor.input_schema["type"], "object");
}

/// Tool whose schema changes every time it is asked for
#[derive(Default)]
struct CountingSchemaTool {
    schema_calls: AtomicUsize,
}

impl Tool for CountingSchemaTool {
    fn name(&self) -> &str {
        "counting"
    }

    fn description(&self) -> &str {
        "Counts schema requests"
    }

    fn input_schema(&self) -> Result<JsonObject> {
        let n = self.schema_calls.fetch_add(1, Ordering::SeqCst);
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), "object".into());
        schema.insert("title".to_string(), format!("n={n}").into());
        Ok(schema)
    }

    fn execute(&self, _arguments: &ToolArguments) -> Result<String> {
        Ok(String::new())
    }
}

#[test]
fn test_descriptors_are_captured_once_at_registration() {
    let tool = Arc::new(CountingSchemaTool::default());
    let registry = ToolRegistry::initialize([Arc::clone(&tool) as Arc<dyn Tool>]).unwrap();

    let first = registry.list_descriptors()[0].input_schema["title"].clone();
    let second = registry.list_descriptors()[0].input_schema["title"].clone();
    let looked_up = registry.descriptor("counting").unwrap().input_schema["title"].clone();

    assert_eq!(first, "n=0");
    assert_eq!(second, first);
    assert_eq!(looked_up, first);
    assert_eq!(tool.schema_calls.load(Ordering::SeqCst), 1);
}
