//! Fixture target shared by the resolution tests.
//!
//! `Ducked` has plain and computed attributes, a few methods with different
//! signatures and is callable as `ducked(argument1, *, argument2)`. Every
//! attribute read is logged so tests can check what was evaluated.
//! `that_one` is computed from an attribute that does not exist.

use duckt::{BoundArgs, CallArgs, Error, Result, Signature, Target};
use serde_json::{json, Value};
use std::cell::RefCell;

pub struct Ducked {
    pub some_property: i64,
    touched: RefCell<Vec<String>>,
}

impl Ducked {
    pub fn new(some_property: i64) -> Self {
        Self {
            some_property,
            touched: RefCell::new(Vec::new()),
        }
    }

    pub fn prop(&self) -> i64 {
        self.some_property + 1
    }

    pub fn prop2(&self) -> i64 {
        self.prop() + 10
    }

    /// Attribute names read so far, in order.
    pub fn touched(&self) -> Vec<String> {
        self.touched.borrow().clone()
    }

    fn bind<'a>(&self, signature: Signature, args: &'a CallArgs<Value>) -> Result<BoundArgs<'a, Value>> {
        signature.bind(&self.describe(), args)
    }

    fn foo(&self, args: &CallArgs<Value>) -> Result<Value> {
        self.bind(Signature::new("foo"), args)?;
        Ok(json!(self.prop()))
    }

    fn bar(&self, args: &CallArgs<Value>) -> Result<Value> {
        let bound = self.bind(
            Signature::new("bar").params(["some_arg1", "some_arg2"]),
            args,
        )?;
        match (bound["some_arg1"].as_i64(), bound["some_arg2"].as_i64()) {
            (Some(a), Some(b)) => Ok(json!(a - b)),
            _ => Err(Error::invocation_mismatch(
                self.describe(),
                "bar",
                "unsupported operand types for -",
            )),
        }
    }

    fn baz(&self, args: &CallArgs<Value>) -> Result<Value> {
        let bound = self.bind(Signature::new("baz").params(["arg"]).varargs().varkw(), args)?;
        Ok(json!({"args": bound.rest(), "kwargs": bound.extra()}))
    }

    fn call(&self, args: &CallArgs<Value>) -> Result<Value> {
        let bound = self.bind(
            Signature::new("__call__")
                .params(["argument1"])
                .keyword_only(["argument2"]),
            args,
        )?;
        match (&bound["argument1"], &bound["argument2"]) {
            (Value::String(a), Value::String(b)) => Ok(json!(format!("{a}{b}").repeat(3))),
            (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
                (Some(a), Some(b)) => Ok(json!((a + b) * 3)),
                _ => Err(Error::invocation_mismatch(self.describe(), "__call__", "expected integers")),
            },
            _ => Err(Error::invocation_mismatch(
                self.describe(),
                "__call__",
                "can only concatenate matching types",
            )),
        }
    }
}

impl Target for Ducked {
    type Value = Value;

    fn describe(&self) -> String {
        format!("Ducked({})", self.some_property)
    }

    fn get_attr(&self, name: &str) -> Result<Value> {
        self.touched.borrow_mut().push(name.to_string());
        match name {
            "some_property" => Ok(json!(self.some_property)),
            "prop" => Ok(json!(self.prop())),
            "prop2" => Ok(json!(self.prop2())),
            "foo" | "bar" | "baz" | "__call__" => Ok(json!(format!("<bound method Ducked.{name}>"))),
            "that_one" => self.get_attr("nonexistent_inner"),
            "broken" | "this_should_not_be_even_tried" => {
                Err(Error::target(self.describe(), format!("computing {name} failed")))
            }
            _ => Err(Error::missing_attribute(self.describe(), name)),
        }
    }

    fn call_method(&self, name: &str, args: &CallArgs<Value>) -> Result<Value> {
        match name {
            "foo" => self.foo(args),
            "bar" => self.bar(args),
            "baz" => self.baz(args),
            "__call__" => self.call(args),
            _ => Err(Error::missing_attribute(self.describe(), name)),
        }
    }
}

pub fn args(positional: impl IntoIterator<Item = Value>) -> CallArgs<Value> {
    CallArgs::from_args(positional)
}
