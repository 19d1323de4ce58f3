//! Common ID Types
//!
//! Type-safe wrappers for identifiers issued by the external backend.
//! The backend owns id generation, so the value is kept opaque.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper around an opaque backend id
///
/// Usage:
/// ```
/// use kernel::id::{EmployeeId, Id};
/// let id: EmployeeId = Id::new("e1");
/// assert_eq!(id.as_str(), "e1");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Integer primary keys are accepted and kept in their decimal form.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self::new(s),
            Raw::Number(n) => Self::new(n.to_string()),
        })
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;

    pub struct Employee;

    pub struct Payslip;
}

pub type UserId = Id<markers::User>;
pub type EmployeeId = Id<markers::Employee>;
pub type PayslipId = Id<markers::Payslip>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id: EmployeeId = Id::new("e1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"e1\"");
    }

    #[test]
    fn test_id_accepts_integer_keys() {
        let id: PayslipId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_id_equality() {
        let a: UserId = "u1".into();
        let b: UserId = String::from("u1").into();
        assert_eq!(a, b);
    }
}
