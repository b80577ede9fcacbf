//! Opaque attribute bag carried by type relations.
//!
//! Relations pass operator attributes (axis, strides, output dtype, ...) through to
//! their resolver untouched. Insertion order is kept so dumps are stable.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;
use tensorty_core::DataType;

/// A single attribute value.
#[derive(Clone, Debug)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Ints(Vec<i64>),
    DataType(DataType),
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Ints(a), Self::Ints(b)) => a == b,
            (Self::DataType(a), Self::DataType(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttrValue {}

impl Hash for AttrValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Str(v) => v.hash(state),
            Self::Ints(v) => v.hash(state),
            Self::DataType(v) => v.hash(state),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Ints(v) => write!(f, "{v:?}"),
            Self::DataType(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<i64>> for AttrValue {
    fn from(v: Vec<i64>) -> Self {
        Self::Ints(v)
    }
}

impl From<DataType> for AttrValue {
    fn from(v: DataType) -> Self {
        Self::DataType(v)
    }
}

/// JSON-facing mirror of `AttrValue`. Data types never come from JSON.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum JsonAttr {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Ints(Vec<i64>),
}

impl From<JsonAttr> for AttrValue {
    fn from(v: JsonAttr) -> Self {
        match v {
            JsonAttr::Bool(v) => Self::Bool(v),
            JsonAttr::Int(v) => Self::Int(v),
            JsonAttr::Float(v) => Self::Float(v),
            JsonAttr::Str(v) => Self::Str(v),
            JsonAttr::Ints(v) => Self::Ints(v),
        }
    }
}

/// Immutable, ordered attribute map. Clones share storage.
#[derive(Clone, Default, Debug)]
pub struct Attrs(Arc<IndexMap<String, AttrValue>>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new bag with `key` set; `self` is left untouched.
    pub fn with(&self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let mut map = (*self.0).clone();
        map.insert(key.into(), value.into());
        Self(Arc::new(map))
    }

    /// Load a flat JSON object such as `{"axis": 1, "keepdims": false}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: IndexMap<String, JsonAttr> = serde_json::from_str(json)?;
        let map = raw.into_iter().map(|(k, v)| (k, v.into())).collect();
        Ok(Self(Arc::new(map)))
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// Order-sensitive: two bags with the same entries in a different order differ.
impl PartialEq for Attrs {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter()))
    }
}

impl Eq for Attrs {}

impl Hash for Attrs {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
        for (k, v) in self.0.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}
