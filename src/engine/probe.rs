use crate::engine::args::CallArgs;
use crate::engine::target::Target;
use crate::error::Result;

/// One declarative way to pull a value out of a target.
///
/// Any `Fn(&T) -> Result<T::Value>` is a probe as well.
pub trait Probe<T: Target + ?Sized> {
    fn apply(&self, target: &T) -> Result<T::Value>;

    fn describe(&self) -> String {
        "probe".to_string()
    }
}

impl<T, F> Probe<T> for F
where
    T: Target + ?Sized,
    F: Fn(&T) -> Result<T::Value>,
{
    fn apply(&self, target: &T) -> Result<T::Value> {
        self(target)
    }
}

/// Reads a named attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrProbe {
    name: String,
}

impl AttrProbe {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Target + ?Sized> Probe<T> for AttrProbe {
    fn apply(&self, target: &T) -> Result<T::Value> {
        target.get_attr(&self.name)
    }

    fn describe(&self) -> String {
        format!("attr {}", self.name)
    }
}

/// Invokes a named method with fixed positional and keyword arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallProbe<V> {
    name: String,
    call: CallArgs<V>,
}

impl<V> CallProbe<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_call_args(name, CallArgs::new())
    }

    pub fn with_call_args(name: impl Into<String>, call: CallArgs<V>) -> Self {
        Self {
            name: name.into(),
            call,
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = V>) -> Self {
        for value in args {
            self.call = self.call.arg(value);
        }
        self
    }

    pub fn with_kwargs<K>(mut self, kwargs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
    {
        self.call = self.call.with_kwargs(kwargs);
        self
    }

    pub fn arg(mut self, value: V) -> Self {
        self.call = self.call.arg(value);
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: V) -> Self {
        self.call = self.call.kwarg(name, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call_args(&self) -> &CallArgs<V> {
        &self.call
    }
}

impl<T: Target + ?Sized> Probe<T> for CallProbe<T::Value> {
    fn apply(&self, target: &T) -> Result<T::Value> {
        target.call_method(&self.name, &self.call)
    }

    fn describe(&self) -> String {
        format!(
            "call {}({} args, {} kwargs)",
            self.name,
            self.call.args().len(),
            self.call.kwargs().len()
        )
    }
}
