//! The shared "nothing worked" policy.
//!
//! A supplied default always wins, whatever its value; `Some(Value::Null)`
//! is a default, `None` is not. Without a default the last recorded failure
//! is returned unchanged. With neither, `no_candidates` builds the error.

use crate::error::{Error, Result};
use tracing::debug;

pub fn default_or_raise<V>(
    last: Option<Error>,
    default: Option<V>,
    no_candidates: impl FnOnce() -> Error,
) -> Result<V> {
    match (default, last) {
        (Some(value), last) => {
            debug!(
                had_failure = last.is_some(),
                "no candidate resolved, using default"
            );
            Ok(value)
        }
        (None, Some(err)) => {
            debug!(error = %err, "no candidate resolved, raising last failure");
            Err(err)
        }
        (None, None) => Err(no_candidates()),
    }
}
