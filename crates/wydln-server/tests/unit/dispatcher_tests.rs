//! Tool Dispatcher Tests

use std::error::Error as _;
use std::sync::Arc;

use wydln_domain::{Error, ToolArguments};
use wydln_server::{ToolDispatcher, ToolRegistry};

use crate::test_utils::{FixedTool, args};

fn dispatcher() -> ToolDispatcher {
    let registry = ToolRegistry::initialize([
        FixedTool::ok("sample", "done").shared(),
        FixedTool::failing("broken", "boom").shared(),
    ])
    .unwrap();
    ToolDispatcher::new(Arc::new(registry))
}

#[test]
fn test_run_returns_tool_output_as_text() {
    let result = dispatcher().run("sample", &ToolArguments::new()).unwrap();
    assert_eq!(result.texts().collect::<Vec<_>>(), vec!["done"]);
}

#[test]
fn test_run_unknown_tool_fails_with_not_found() {
    let err = dispatcher()
        .run("nonexistent", &ToolArguments::new())
        .unwrap_err();

    assert!(matches!(err, Error::ToolNotFound { ref name } if name == "nonexistent"));
    assert!(err.to_string().contains("nonexistent"));
}

#[test]
fn test_run_wraps_tool_failure_with_tool_name() {
    let err = dispatcher()
        .run("broken", &args(serde_json::json!({"x": 1})))
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, Error::ToolExecution { ref tool, .. } if tool == "broken"));
    assert!(message.contains("broken"), "{message}");
    assert!(message.contains("boom"), "{message}");
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("boom"));
}

#[test]
fn test_failed_call_does_not_affect_later_calls() {
    let dispatcher = dispatcher();
    assert!(dispatcher.run("broken", &ToolArguments::new()).is_err());
    assert!(dispatcher.run("sample", &ToolArguments::new()).is_ok());
}
