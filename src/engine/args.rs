//! Argument sets and signature binding.
//!
//! A `CallArgs` is one attempted call: positional values plus a keyword
//! mapping. A `Signature` describes the parameters a method or callable
//! accepts and binds a `CallArgs` against them, reporting
//! `InvocationMismatch` the way a dynamic runtime rejects a bad call.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallArgs<V> {
    #[serde(default)]
    args: Vec<V>,

    #[serde(default)]
    kwargs: BTreeMap<String, V>,
}

impl<V> CallArgs<V> {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            kwargs: BTreeMap::new(),
        }
    }

    pub fn from_args(args: impl IntoIterator<Item = V>) -> Self {
        Self {
            args: args.into_iter().collect(),
            kwargs: BTreeMap::new(),
        }
    }

    pub fn arg(mut self, value: V) -> Self {
        self.args.push(value);
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: V) -> Self {
        self.kwargs.insert(name.into(), value);
        self
    }

    pub fn with_kwargs<K>(mut self, kwargs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
    {
        self.kwargs
            .extend(kwargs.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    pub fn args(&self) -> &[V] {
        &self.args
    }

    pub fn kwargs(&self) -> &BTreeMap<String, V> {
        &self.kwargs
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }
}

impl<V> Default for CallArgs<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<V>> for CallArgs<V> {
    fn from(args: Vec<V>) -> Self {
        Self::from_args(args)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    name: String,
    params: Vec<String>,
    keyword_only: Vec<String>,
    varargs: bool,
    varkw: bool,
}

impl Signature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Positional-or-keyword parameters, in order.
    pub fn params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn keyword_only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyword_only.extend(names.into_iter().map(Into::into));
        self
    }

    /// Accept any number of extra positional arguments.
    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    /// Accept any extra keyword arguments.
    pub fn varkw(mut self) -> Self {
        self.varkw = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bind<'a, V>(&self, target: &str, call: &'a CallArgs<V>) -> Result<BoundArgs<'a, V>> {
        let positional = call.args();
        if positional.len() > self.params.len() && !self.varargs {
            return Err(self.mismatch(
                target,
                format!(
                    "takes {} positional argument{} but {} were given",
                    self.params.len(),
                    if self.params.len() == 1 { "" } else { "s" },
                    positional.len()
                ),
            ));
        }

        let mut named: BTreeMap<String, &'a V> = self
            .params
            .iter()
            .cloned()
            .zip(positional.iter())
            .collect();
        let rest = positional.get(self.params.len()..).unwrap_or(&[]);

        let mut extra = BTreeMap::new();
        for (key, value) in call.kwargs() {
            let declared = self.params.contains(key) || self.keyword_only.contains(key);
            if declared {
                if named.contains_key(key) {
                    return Err(
                        self.mismatch(target, format!("got multiple values for argument '{key}'"))
                    );
                }
                named.insert(key.clone(), value);
            } else if self.varkw {
                extra.insert(key.as_str(), value);
            } else {
                return Err(
                    self.mismatch(target, format!("got an unexpected keyword argument '{key}'"))
                );
            }
        }

        let missing: Vec<String> = self
            .params
            .iter()
            .chain(&self.keyword_only)
            .filter(|param| !named.contains_key(*param))
            .map(|param| format!("'{param}'"))
            .collect();
        if !missing.is_empty() {
            return Err(self.mismatch(
                target,
                format!(
                    "missing {} required argument{}: {}",
                    missing.len(),
                    if missing.len() == 1 { "" } else { "s" },
                    missing.join(", ")
                ),
            ));
        }

        Ok(BoundArgs { named, rest, extra })
    }

    fn mismatch(&self, target: &str, reason: String) -> Error {
        Error::invocation_mismatch(target, self.name.as_str(), reason)
    }
}

/// Arguments matched to a `Signature`. Every declared parameter is present.
#[derive(Debug)]
pub struct BoundArgs<'a, V> {
    named: BTreeMap<String, &'a V>,
    rest: &'a [V],
    extra: BTreeMap<&'a str, &'a V>,
}

impl<'a, V> BoundArgs<'a, V> {
    pub fn get(&self, name: &str) -> Option<&'a V> {
        self.named.get(name).copied()
    }

    /// Positional values beyond the declared parameters.
    pub fn rest(&self) -> &'a [V] {
        self.rest
    }

    /// Keyword values not matching any declared parameter.
    pub fn extra(&self) -> &BTreeMap<&'a str, &'a V> {
        &self.extra
    }
}

/// Looks up a declared parameter.
///
/// # Panics
///
/// Panics if `name` is not a parameter of the bound signature. Use
/// [`BoundArgs::get`] when the name is not known to be declared.
impl<V> Index<&str> for BoundArgs<'_, V> {
    type Output = V;

    fn index(&self, name: &str) -> &V {
        match self.named.get(name) {
            Some(value) => *value,
            None => panic!("no parameter named '{name}' in bound arguments"),
        }
    }
}
