//! Stable record identities.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// The label a record keeps through a whole run.
///
/// Assigned once by the normalizer and never recomputed from position,
/// so removal bookkeeping cannot shift it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Identity {
    /// 0-based position in a plain sequence of values.
    Index(usize),
    /// Caller-supplied integer ID or mapping key.
    Integer(i64),
    /// Caller-supplied integer ID above `i64::MAX`.
    Unsigned(u64),
    /// Caller-supplied floating point ID or mapping key.
    Float(f64),
    /// Caller-supplied string ID or mapping key.
    Text(String),
    /// Caller-supplied boolean ID.
    Bool(bool),
}

impl Identity {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

// Floats compare by bit pattern so `Identity` can key hash maps.
impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Index(a), Self::Index(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Unsigned(a), Self::Unsigned(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Index(i) => i.hash(state),
            Self::Integer(i) => i.hash(state),
            Self::Unsigned(u) => u.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Text(s) => s.hash(state),
            Self::Bool(b) => b.hash(state),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Unsigned(u) => write!(f, "{u}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<usize> for Identity {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<i64> for Identity {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u64> for Identity {
    fn from(u: u64) -> Self {
        Self::Unsigned(u)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
