//! Duck typing helpers
//!
//! Probe an object of unknown shape for the first usable attribute, method
//! result or call result among ordered candidates, falling back to a
//! default or a typed failure when none succeed.

pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;

pub use engine::{
    AttrProbe, BoundArgs, CallArgs, CallProbe, Callable, Duck, DuckContext, Probe, Signature,
    Strategy, Target,
};
pub use error::{Error, ErrorKind, Result};
