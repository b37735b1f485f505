use crate::engine::{CallArgs, Strategy, Target};
use crate::error::{Error, Result};
use std::borrow::Borrow;

/// Calls the target itself with each argument set in order. Only an
/// incompatible call moves on.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallStrategy;

impl<T, A> Strategy<T, A> for CallStrategy
where
    T: Target + ?Sized,
    A: Borrow<CallArgs<T::Value>>,
{
    fn name(&self) -> &'static str {
        "call"
    }

    fn attempt(&self, target: &T, args: &A) -> Result<T::Value> {
        target.invoke(args.borrow())
    }

    fn falls_through(&self, err: &Error) -> bool {
        err.is_invocation_mismatch()
    }
}
