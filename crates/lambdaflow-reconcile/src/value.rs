//! Tri-state optional values
//!
//! "The user never set this" and "the service will compute this" are
//! observably different states, so remote-computed fields are kept as a
//! tagged variant instead of being collapsed into `Option`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value<T> {
    /// Not set and not reported by the service
    Absent,
    /// Will be computed by the service, not known yet
    Pending,
    /// Known value, reported by the service
    Known(T),
}

impl<T> Value<T> {
    /// Maps what a remote response carried: a present value becomes
    /// `Known`, a missing one is explicitly `Absent`.
    pub fn from_remote(reported: Option<T>) -> Self {
        match reported {
            Some(v) => Value::Known(v),
            None => Value::Absent,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Value::Pending)
    }

    pub fn as_known(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_known(self) -> Option<T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }
}
