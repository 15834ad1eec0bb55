use ipc_core::errors::{ErrorInfo, IpcError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("position", 3)
        .with_context("reason", "example")
}

#[test]
fn code_error_surface() {
    let err = IpcError::Code(sample_info("odd-length", "curve code has odd length"));
    assert_eq!(err.info().code, "odd-length");
    assert!(err.info().context.contains_key("position"));
    assert!(err.to_string().starts_with("malformed curve code"));
}

#[test]
fn move_error_surface() {
    let err = IpcError::Move(sample_info("unknown-move", "no such move"));
    assert_eq!(err.info().code, "unknown-move");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn store_error_surface() {
    let err = IpcError::Store(sample_info("ipc_explore.query", "locked"));
    assert_eq!(err.info().code, "ipc_explore.query");
}

#[test]
fn display_lists_context_and_hint() {
    let err = IpcError::Config(
        ErrorInfo::new("progress-every", "progress interval must be positive")
            .with_context("value", 0)
            .with_hint("use a value of at least 1"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("value=0"));
    assert!(rendered.contains("hint: use a value of at least 1"));
}
