use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A failure raised by the target itself, e.g. a computed attribute that
/// blew up. These never trigger trying the next candidate.
#[derive(Error, Debug)]
#[error("{target} failed: {source}")]
pub struct TargetError {
    pub target: String,
    #[source]
    pub source: BoxError,
}

impl TargetError {
    pub fn new(target: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
        }
    }
}
