//! Style identifiers and declared parameter shapes

use crate::error::DecodeError;
use std::fmt;
use std::str::FromStr;

/// OpenAPI v3 serialization style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Style {
    /// Path-style parameters (`;color=blue`)
    Matrix,
    /// Label expansion (`.blue`)
    Label,
    /// Form-style query parameters (`color=blue&size=m`)
    Form,
    /// Simple comma-separated values (`blue,black`)
    Simple,
    /// Space-separated array values (`blue%20black`)
    SpaceDelimited,
    /// Pipe-separated array values (`blue|black`)
    PipeDelimited,
    /// Bracket-qualified object keys (`color[R]=100`)
    DeepObject,
}

impl Style {
    /// All styles in declaration order
    pub const ALL: [Self; 7] = [
        Self::Matrix,
        Self::Label,
        Self::Form,
        Self::Simple,
        Self::SpaceDelimited,
        Self::PipeDelimited,
        Self::DeepObject,
    ];

    /// Parse a style identifier
    ///
    /// Matching is case-sensitive, as in the OpenAPI document itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use param_style::Style;
    ///
    /// assert_eq!(Style::parse("deepObject"), Some(Style::DeepObject));
    /// assert_eq!(Style::parse("DeepObject"), None);
    /// ```
    #[must_use]
    pub fn parse(ident: &str) -> Option<Self> {
        match ident {
            "matrix" => Some(Self::Matrix),
            "label" => Some(Self::Label),
            "form" => Some(Self::Form),
            "simple" => Some(Self::Simple),
            "spaceDelimited" => Some(Self::SpaceDelimited),
            "pipeDelimited" => Some(Self::PipeDelimited),
            "deepObject" => Some(Self::DeepObject),
            _ => None,
        }
    }

    /// Identifier as written in an OpenAPI document
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Label => "label",
            Self::Form => "form",
            Self::Simple => "simple",
            Self::SpaceDelimited => "spaceDelimited",
            Self::PipeDelimited => "pipeDelimited",
            Self::DeepObject => "deepObject",
        }
    }
}

impl FromStr for Style {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DecodeError::UnknownStyle {
            style: s.to_string(),
        })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape the caller expects a parameter to have
///
/// Taken from the governing schema. The decoder dispatches on this tag alone,
/// regardless of what the raw input looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ParamShape {
    /// Presence only, no value
    Empty,
    /// Single string value
    Primitive,
    /// Ordered list of string values
    Array,
    /// String to string mapping
    Object,
}
