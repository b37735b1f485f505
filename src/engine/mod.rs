pub mod args;
pub mod context;
pub mod fallback;
pub mod probe;
pub mod strategies;
pub mod target;

pub use args::{BoundArgs, CallArgs, Signature};
pub use context::DuckContext;
pub use probe::{AttrProbe, CallProbe, Probe};
pub use target::{Callable, Target};

use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt;
use strategies::{AttrCallStrategy, AttrStrategy, CallStrategy};
use tracing::{debug, trace};

/// One way of attempting candidates of type `C` against a target.
pub trait Strategy<T: Target + ?Sized, C> {
    fn name(&self) -> &'static str;

    fn attempt(&self, target: &T, candidate: &C) -> Result<T::Value>;

    /// Whether `err` means "try the next candidate" rather than abort.
    fn falls_through(&self, err: &Error) -> bool;

    /// Folds a fall-through failure into what has been recorded so far.
    /// The result is what gets raised when every candidate fails.
    fn record(&self, target: &T, candidate: &C, previous: Option<Error>, err: Error) -> Error {
        let _ = (target, candidate, previous);
        err
    }
}

/// Resolver bound to a borrowed target.
///
/// Every query walks its candidates in the order given and returns the first
/// success. Later candidates are never touched. When all of them fail the
/// default is returned if one was supplied, otherwise the recorded failure.
pub struct Duck<'a, T: Target + ?Sized> {
    target: &'a T,
}

impl<'a, T: Target + ?Sized> Duck<'a, T> {
    pub fn new(target: &'a T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'a T {
        self.target
    }

    /// First attribute present among `names`.
    pub fn attr<I>(&self, names: I) -> Result<T::Value>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.resolve(&AttrStrategy, names, None)
    }

    pub fn attr_or<I>(&self, names: I, default: T::Value) -> Result<T::Value>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.resolve(&AttrStrategy, names, Some(default))
    }

    /// First duck context that applies cleanly.
    pub fn attr_call<'c, I>(&self, contexts: I) -> Result<T::Value>
    where
        I: IntoIterator<Item = DuckContext<'c, T>>,
    {
        self.resolve(&AttrCallStrategy, contexts, None)
    }

    pub fn attr_call_or<'c, I>(&self, contexts: I, default: T::Value) -> Result<T::Value>
    where
        I: IntoIterator<Item = DuckContext<'c, T>>,
    {
        self.resolve(&AttrCallStrategy, contexts, Some(default))
    }

    /// First argument set the target accepts when called directly.
    pub fn call<I>(&self, arg_sets: I) -> Result<T::Value>
    where
        I: IntoIterator,
        I::Item: Borrow<CallArgs<T::Value>>,
    {
        self.resolve(&CallStrategy, arg_sets, None)
    }

    pub fn call_or<I>(&self, arg_sets: I, default: T::Value) -> Result<T::Value>
    where
        I: IntoIterator,
        I::Item: Borrow<CallArgs<T::Value>>,
    {
        self.resolve(&CallStrategy, arg_sets, Some(default))
    }

    pub fn resolve<S, I>(
        &self,
        strategy: &S,
        candidates: I,
        default: Option<T::Value>,
    ) -> Result<T::Value>
    where
        S: Strategy<T, I::Item> + ?Sized,
        I: IntoIterator,
    {
        let mut last = None;
        for (attempt, candidate) in candidates.into_iter().enumerate() {
            match strategy.attempt(self.target, &candidate) {
                Ok(value) => {
                    debug!(strategy = strategy.name(), attempt, "resolved");
                    return Ok(value);
                }
                Err(err) if strategy.falls_through(&err) => {
                    trace!(strategy = strategy.name(), attempt, error = %err, "trying next candidate");
                    last = Some(strategy.record(self.target, &candidate, last.take(), err));
                }
                Err(err) => {
                    debug!(strategy = strategy.name(), attempt, error = %err, "aborted");
                    return Err(err);
                }
            }
        }

        fallback::default_or_raise(last, default, || {
            Error::no_candidates(self.target.describe(), strategy.name())
        })
    }
}

impl<T: Target + ?Sized> Clone for Duck<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Target + ?Sized> Copy for Duck<'_, T> {}

impl<T: Target + ?Sized> fmt::Debug for Duck<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("target", &self.target.describe())
            .finish()
    }
}
