use thiserror::Error;

/// Name of the method a target routes direct invocation through.
pub const CALL_METHOD: &str = "__call__";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{callee}() on {target}: {reason}")]
pub struct InvocationMismatch {
    pub target: String,
    pub callee: String,
    pub reason: String,
}

impl InvocationMismatch {
    pub fn new(
        target: impl Into<String>,
        callee: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            callee: callee.into(),
            reason: reason.into(),
        }
    }

    pub fn not_callable(target: impl Into<String>) -> Self {
        Self::new(target, CALL_METHOD, "object is not callable")
    }
}
