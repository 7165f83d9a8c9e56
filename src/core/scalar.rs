//! Numeric values that may be undetermined.
//!
//! A handful of summary fields (ZEst, Zd, D, Adj D, EBPer) have no value for
//! some protocols: Zf outside the estimate table, a non-finite difference, or
//! an EB that is not pervasive. Those fields are rendered as `-` on the
//! summary sheet and every index criterion that reads them must treat the
//! undetermined case explicitly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Serialized and displayed form of [`Scalar::Undetermined`].
pub const UNDETERMINED: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar<T> {
    Number(T),
    Undetermined,
}

impl<T> Default for Scalar<T> {
    fn default() -> Self {
        Self::Undetermined
    }
}

impl<T> Scalar<T> {
    pub fn number(self) -> Option<T> {
        match self {
            Self::Number(n) => Some(n),
            Self::Undetermined => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Scalar<U> {
        match self {
            Self::Number(n) => Scalar::Number(f(n)),
            Self::Undetermined => Scalar::Undetermined,
        }
    }

    /// True only when the value is a number satisfying `pred`.
    pub fn is_number_and(self, pred: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Number(n) => pred(n),
            Self::Undetermined => false,
        }
    }

    /// The number, or `fallback` when undetermined.
    pub fn unwrap_or(self, fallback: T) -> T {
        self.number().unwrap_or(fallback)
    }
}

impl<T> From<Option<T>> for Scalar<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undetermined, Self::Number)
    }
}

impl<T: fmt::Display> fmt::Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // forward so that `{:.1}` reaches the number
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Undetermined => f.write_str(UNDETERMINED),
        }
    }
}

impl<T: Serialize> Serialize for Scalar<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => n.serialize(serializer),
            Self::Undetermined => serializer.serialize_str(UNDETERMINED),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Scalar<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Number(T),
            Text(String),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Self::Number(n)),
            Repr::Text(text) if text == UNDETERMINED => Ok(Self::Undetermined),
            Repr::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a number or {UNDETERMINED:?}, found {text:?}"
            ))),
        }
    }
}
