mod attribute;
mod invocation;
mod target;

pub use attribute::MissingAttribute;
pub use invocation::{InvocationMismatch, CALL_METHOD};
pub use target::TargetError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    MissingAttribute(#[from] MissingAttribute),

    #[error(transparent)]
    InvocationMismatch(#[from] InvocationMismatch),

    #[error("no candidates given to {strategy} for {target}")]
    NoCandidates {
        target: String,
        strategy: &'static str,
    },

    #[error(transparent)]
    Target(#[from] TargetError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingAttribute,
    InvocationMismatch,
    NoCandidates,
    Target,
}

impl Error {
    pub fn missing_attribute(target: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingAttribute(MissingAttribute::new(target, name))
    }

    pub fn invocation_mismatch(
        target: impl Into<String>,
        callee: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvocationMismatch(InvocationMismatch::new(target, callee, reason))
    }

    pub fn not_callable(target: impl Into<String>) -> Self {
        Self::InvocationMismatch(InvocationMismatch::not_callable(target))
    }

    pub fn no_candidates(target: impl Into<String>, strategy: &'static str) -> Self {
        Self::NoCandidates {
            target: target.into(),
            strategy,
        }
    }

    pub fn target(
        target: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Target(TargetError::new(target, source))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingAttribute(_) => ErrorKind::MissingAttribute,
            Self::InvocationMismatch(_) => ErrorKind::InvocationMismatch,
            Self::NoCandidates { .. } => ErrorKind::NoCandidates,
            Self::Target(_) => ErrorKind::Target,
        }
    }

    pub fn is_missing_attribute(&self) -> bool {
        self.kind() == ErrorKind::MissingAttribute
    }

    pub fn is_invocation_mismatch(&self) -> bool {
        self.kind() == ErrorKind::InvocationMismatch
    }
}

pub type Result<T> = std::result::Result<T, Error>;
