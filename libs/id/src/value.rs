//! The opaque identifier value type.

use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

/// An opaque, immutable identifier of the form `{prefix}_{tail}`.
///
/// Equality, ordering, and hashing delegate to the wrapped string, and
/// conversion to and from the raw string is lossless and idempotent: any
/// non-empty string round-trips unchanged. Beyond rejecting the empty
/// string, `TypeId` performs no structural validation; the shape of the
/// value is owned by the generator that produced it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(String);

impl TypeId {
    /// Wraps a raw identifier value.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Empty`] for the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(value))
    }

    /// Wraps generator output, which is never empty.
    pub(crate) fn from_generated(value: String) -> Self {
        Self(value)
    }

    /// The raw string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the raw string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The prefix half, when the value contains a separator.
    pub fn prefix(&self) -> Option<&str> {
        self.0.split_once('_').map(|(prefix, _)| prefix)
    }

    /// The random tail half, when the value contains a separator.
    pub fn tail(&self) -> Option<&str> {
        self.0.split_once('_').map(|(_, tail)| tail)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TypeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TypeId> for String {
    fn from(id: TypeId) -> Self {
        id.0
    }
}

impl serde::Serialize for TypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_is_lossless() {
        let id = TypeId::new("u_07b2e1a4kq").unwrap();
        let raw = id.clone().into_string();
        let back: TypeId = raw.parse().unwrap();
        assert_eq!(id, back);
        assert_eq!(back.as_str(), "u_07b2e1a4kq");
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(TypeId::new(""), Err(IdError::Empty)));
        assert!(matches!("".parse::<TypeId>(), Err(IdError::Empty)));
    }

    #[test]
    fn splits_on_first_separator() {
        let id = TypeId::new("inv_c94d02f7px").unwrap();
        assert_eq!(id.prefix(), Some("inv"));
        assert_eq!(id.tail(), Some("c94d02f7px"));

        let bare = TypeId::new("noseparator").unwrap();
        assert_eq!(bare.prefix(), None);
        assert_eq!(bare.tail(), None);
    }

    #[test]
    fn equality_and_hash_delegate_to_value() {
        use std::collections::HashSet;

        let a = TypeId::new("u_aaaa").unwrap();
        let b = TypeId::new("u_aaaa").unwrap();
        let c = TypeId::new("u_bbbb").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<TypeId> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn json_roundtrip() {
        let id = TypeId::new("u_07b2e1a4kq").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u_07b2e1a4kq\"");
        let back: TypeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn json_rejects_empty() {
        let result: Result<TypeId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
