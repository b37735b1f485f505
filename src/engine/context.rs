//! Duck contexts: the candidates tried by `Duck::attr_call`.
//!
//! A context is either a bare attribute name, read once, or a probe applied
//! to the target.

use crate::engine::probe::{AttrProbe, CallProbe, Probe};
use crate::engine::target::Target;
use crate::error::Result;
use std::borrow::Cow;
use std::fmt;

pub enum DuckContext<'c, T: Target + ?Sized> {
    Attr(Cow<'c, str>),
    Probe(Box<dyn Probe<T> + 'c>),
}

impl<'c, T: Target + ?Sized> DuckContext<'c, T> {
    pub fn attr(name: impl Into<Cow<'c, str>>) -> Self {
        Self::Attr(name.into())
    }

    pub fn probe<P>(probe: P) -> Self
    where
        P: Probe<T> + 'c,
    {
        Self::Probe(Box::new(probe))
    }

    pub fn func<F>(func: F) -> Self
    where
        F: Fn(&T) -> Result<T::Value> + 'c,
    {
        Self::Probe(Box::new(func))
    }

    pub fn apply(&self, target: &T) -> Result<T::Value> {
        match self {
            Self::Attr(name) => target.get_attr(name),
            Self::Probe(probe) => probe.apply(target),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Attr(name) => format!("attr {name}"),
            Self::Probe(probe) => probe.describe(),
        }
    }
}

impl<'c, T: Target + ?Sized> From<&'c str> for DuckContext<'c, T> {
    fn from(name: &'c str) -> Self {
        Self::attr(name)
    }
}

impl<'c, T: Target + ?Sized> From<String> for DuckContext<'c, T> {
    fn from(name: String) -> Self {
        Self::attr(name)
    }
}

impl<'c, T: Target + ?Sized> From<AttrProbe> for DuckContext<'c, T> {
    fn from(probe: AttrProbe) -> Self {
        Self::probe(probe)
    }
}

impl<'c, T> From<CallProbe<T::Value>> for DuckContext<'c, T>
where
    T: Target + ?Sized,
    T::Value: 'c,
{
    fn from(probe: CallProbe<T::Value>) -> Self {
        Self::probe(probe)
    }
}

impl<T: Target + ?Sized> fmt::Debug for DuckContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attr(name) => f.debug_tuple("Attr").field(name).finish(),
            Self::Probe(probe) => f.debug_tuple("Probe").field(&probe.describe()).finish(),
        }
    }
}
