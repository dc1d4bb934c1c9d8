//! Plain data records kept in the catalogs, their keys and the raw forms used to add them.

pub mod person;
pub mod restaurant;

pub use person::*;
pub use restaurant::*;

/// A string that is not one of a fixed set of values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
