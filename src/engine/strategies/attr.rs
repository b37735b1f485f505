use crate::engine::{Strategy, Target};
use crate::error::{Error, MissingAttribute, Result};

/// Tries attribute names in order. Only a missing attribute moves on to the
/// next name; the exhausted failure lists every name tried.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttrStrategy;

impl<T, N> Strategy<T, N> for AttrStrategy
where
    T: Target + ?Sized,
    N: AsRef<str>,
{
    fn name(&self) -> &'static str {
        "attr"
    }

    fn attempt(&self, target: &T, name: &N) -> Result<T::Value> {
        target.get_attr(name.as_ref())
    }

    fn falls_through(&self, err: &Error) -> bool {
        err.is_missing_attribute()
    }

    fn record(&self, target: &T, name: &N, previous: Option<Error>, _err: Error) -> Error {
        let miss = MissingAttribute::new(target.describe(), name.as_ref());
        match previous {
            Some(Error::MissingAttribute(seen)) => seen.absorb(miss).into(),
            _ => miss.into(),
        }
    }
}
