use crate::engine::{DuckContext, Strategy, Target};
use crate::error::{Error, ErrorKind, Result};

/// Tries duck contexts in order. A missing attribute or an incompatible
/// call moves on; the last such failure is kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttrCallStrategy;

impl<'c, T> Strategy<T, DuckContext<'c, T>> for AttrCallStrategy
where
    T: Target + ?Sized,
{
    fn name(&self) -> &'static str {
        "attr_call"
    }

    fn attempt(&self, target: &T, context: &DuckContext<'c, T>) -> Result<T::Value> {
        context.apply(target)
    }

    fn falls_through(&self, err: &Error) -> bool {
        matches!(
            err.kind(),
            ErrorKind::MissingAttribute | ErrorKind::InvocationMismatch
        )
    }
}
