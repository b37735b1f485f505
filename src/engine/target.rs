//! Objects that can be probed.
//!
//! A target answers three capability-checked questions: "give me this
//! attribute", "call this method with these arguments" and "call yourself
//! with these arguments". Absence is reported as `MissingAttribute`, an
//! incompatible call as `InvocationMismatch`; anything else the target
//! raises is a hard failure.

use crate::engine::args::{BoundArgs, CallArgs, Signature};
use crate::error::{Error, Result, CALL_METHOD};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

pub trait Target {
    type Value;

    /// Rendering of the target used in failure messages.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    fn get_attr(&self, name: &str) -> Result<Self::Value>;

    fn call_method(&self, name: &str, args: &CallArgs<Self::Value>) -> Result<Self::Value> {
        let _ = args;
        Err(Error::missing_attribute(self.describe(), name))
    }

    /// Calls the target itself. Routed through the `__call__` method; a
    /// target without one is not callable. A miss raised while running
    /// `__call__` is returned as is.
    fn invoke(&self, args: &CallArgs<Self::Value>) -> Result<Self::Value> {
        match self.call_method(CALL_METHOD, args) {
            Err(Error::MissingAttribute(miss))
                if miss.is_lookup_of(&self.describe(), CALL_METHOD) =>
            {
                Err(Error::not_callable(self.describe()))
            }
            other => other,
        }
    }
}

macro_rules! forward_target {
    ($($ptr:ty),*) => {
        $(
            impl<T: Target + ?Sized> Target for $ptr {
                type Value = T::Value;

                fn describe(&self) -> String {
                    (**self).describe()
                }

                fn get_attr(&self, name: &str) -> Result<Self::Value> {
                    (**self).get_attr(name)
                }

                fn call_method(&self, name: &str, args: &CallArgs<Self::Value>) -> Result<Self::Value> {
                    (**self).call_method(name, args)
                }

                fn invoke(&self, args: &CallArgs<Self::Value>) -> Result<Self::Value> {
                    (**self).invoke(args)
                }
            }
        )*
    };
}

forward_target!(&T, Box<T>, Rc<T>, Arc<T>);

/// JSON documents expose object keys as attributes. They have no methods
/// and are not callable.
impl Target for serde_json::Value {
    type Value = serde_json::Value;

    fn describe(&self) -> String {
        let kind = match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        };
        format!("json {kind}")
    }

    fn get_attr(&self, name: &str) -> Result<Self::Value> {
        self.as_object()
            .and_then(|map| map.get(name))
            .cloned()
            .ok_or_else(|| Error::missing_attribute(self.describe(), name))
    }
}

/// A plain function made probeable. Direct invocation binds the arguments
/// against `signature` before running `func`.
pub struct Callable<F, V> {
    signature: Signature,
    func: F,
    _value: PhantomData<fn() -> V>,
}

impl<F, V> Callable<F, V> {
    pub fn new(signature: Signature, func: F) -> Self
    where
        F: Fn(BoundArgs<'_, V>) -> Result<V>,
    {
        Self {
            signature,
            func,
            _value: PhantomData,
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    fn run(&self, args: &CallArgs<V>) -> Result<V>
    where
        F: Fn(BoundArgs<'_, V>) -> Result<V>,
    {
        let bound = self.signature.bind(&self.describe(), args)?;
        (self.func)(bound)
    }
}

impl<F, V> std::fmt::Debug for Callable<F, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl<F, V> Target for Callable<F, V>
where
    F: Fn(BoundArgs<'_, V>) -> Result<V>,
{
    type Value = V;

    fn describe(&self) -> String {
        format!("function {}", self.signature.name())
    }

    fn get_attr(&self, name: &str) -> Result<V> {
        Err(Error::missing_attribute(self.describe(), name))
    }

    fn call_method(&self, name: &str, args: &CallArgs<V>) -> Result<V> {
        if name != CALL_METHOD {
            return Err(Error::missing_attribute(self.describe(), name));
        }
        self.run(args)
    }

    fn invoke(&self, args: &CallArgs<V>) -> Result<V> {
        self.run(args)
    }
}
