//! deepObject bracket names (`color[R]`)
//!
//! A bracket-qualified name carries the object key inside the name. The
//! extractor splits it into the outer parameter name and the key so the
//! decoder can treat `color[R]=100` like the tuple `R=100` of `color`.
//!
//! Nested names are not unpacked into nested objects. Everything between the
//! first `[` and the last `]` becomes one flat key, so `bonzo[ok][a][b]`
//! yields the key `ok][a][b`.

use regex::Regex;
use std::sync::LazyLock;

/// One bracket group holding one or more ASCII word characters
#[allow(clippy::expect_used)]
static BRACKET_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9A-Za-z_]+\]").expect("bracket pattern is valid"));

/// A name split into its outer parameter name and object key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketName {
    /// Name with every bracket group removed
    pub base: String,
    /// Key found inside the brackets
    pub key: String,
}

impl BracketName {
    /// Rewrite a value into a `key=value` tuple for this name
    #[must_use]
    pub fn to_tuple(&self, value: &str) -> String {
        format!("{}={value}", self.key)
    }
}

/// Check if a name contains at least one bracket group
fn is_bracketed(name: &str) -> bool {
    BRACKET_GROUP.is_match(name)
}

/// Split a bracket-qualified name
///
/// Returns `None` when the name has no bracket group or when nothing is left
/// to use as a key.
///
/// # Examples
///
/// ```
/// use param_style::bracket::split_bracketed;
///
/// let name = split_bracketed("color[R]").expect("bracketed");
/// assert_eq!(name.base, "color");
/// assert_eq!(name.key, "R");
///
/// assert!(split_bracketed("color").is_none());
/// ```
#[must_use]
pub fn split_bracketed(name: &str) -> Option<BracketName> {
    if !is_bracketed(name) {
        return None;
    }

    let base = BRACKET_GROUP.replace_all(name, "").into_owned();
    let remainder = if base.is_empty() {
        name.to_string()
    } else {
        name.replace(base.as_str(), "")
    };

    // Outer brackets are assumed, not checked: `a[b]c` keeps `[b]`
    let mut chars = remainder.chars();
    chars.next();
    chars.next_back();
    let key = chars.as_str();
    if key.is_empty() {
        return None;
    }

    Some(BracketName {
        base,
        key: key.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_group() {
        let name = split_bracketed("color[R]").unwrap();
        assert_eq!(name.base, "color");
        assert_eq!(name.key, "R");
        assert_eq!(name.to_tuple("100"), "R=100");
    }

    #[test]
    fn test_nested_groups_flatten() {
        let name = split_bracketed("bonzo[ok][a][b]").unwrap();
        assert_eq!(name.base, "bonzo");
        assert_eq!(name.key, "ok][a][b");
    }

    #[test]
    fn test_no_base_name() {
        let name = split_bracketed("[R]").unwrap();
        assert_eq!(name.base, "");
        assert_eq!(name.key, "R");
    }

    #[test]
    fn test_not_bracketed() {
        assert!(split_bracketed("color").is_none());
        assert!(split_bracketed("color[]").is_none());
        assert!(split_bracketed("color[R-1]").is_none());
        assert!(split_bracketed("color[é]").is_none());
        assert!(!is_bracketed("color]["));
    }

    #[test]
    fn test_base_swallows_key() {
        // Removing the base "a" from "a[a]" leaves "[]", so no key remains
        assert!(is_bracketed("a[a]"));
        assert!(split_bracketed("a[a]").is_none());
    }

    #[test]
    fn test_split_base_trims_outer_characters() {
        // Removing "ac" finds nothing, so the first and last characters go
        let name = split_bracketed("a[b]c").unwrap();
        assert_eq!(name.base, "ac");
        assert_eq!(name.key, "[b]");

        let name = split_bracketed("x[ab]y[c]").unwrap();
        assert_eq!(name.base, "xy");
        assert_eq!(name.key, "[ab]y[c");
    }

    #[test]
    fn test_underscore_and_digits() {
        let name = split_bracketed("filter[created_at2]").unwrap();
        assert_eq!(name.base, "filter");
        assert_eq!(name.key, "created_at2");
    }
}
