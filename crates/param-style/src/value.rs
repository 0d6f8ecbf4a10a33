//! Decoded parameter values

use std::collections::BTreeMap;

/// Object payload: unique keys, last write wins
pub type ParamMap = BTreeMap<String, String>;

/// Value held by a parameter after decoding
///
/// With the `serde` feature the value serializes untagged, so a bag renders
/// as plain JSON (`null`, `"blue"`, `["a","b"]`, `{"R":"100"}`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    /// Parameter is present without a value
    None,
    /// Single string value
    Scalar(String),
    /// Items in order of appearance
    List(Vec<String>),
    /// Object keys and values
    Map(ParamMap),
}

impl ParamValue {
    /// Check if this is a presence-only value
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Get the string if this is a scalar
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Get the items if this is a list
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a map
    #[must_use]
    pub fn as_map(&self) -> Option<&ParamMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, used in log output
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<ParamMap> for ParamValue {
    fn from(map: ParamMap) -> Self {
        Self::Map(map)
    }
}
