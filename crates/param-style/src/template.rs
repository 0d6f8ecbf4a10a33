//! Delimiter templates for each (style, explode) combination
//!
//! Every style is described by five delimiters. An empty delimiter changes
//! the meaning of its slot rather than matching anything:
//!
//! | slot | empty means |
//! |---|---|
//! | `key_value` | segments carry no parameter name |
//! | `array_item` | array items arrive as repeated segments |
//! | `object_key_value` | object tuples are positional key/value pairs |
//!
//! The table is fixed. Combinations that are not listed, such as an exploded
//! `spaceDelimited` parameter, have no template.

use crate::style::Style;

/// Delimiter set used to tokenize one serialized parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTemplate {
    /// Splits independent name/value segments
    pub pair: &'static str,
    /// Splits the name from the value within a segment
    pub key_value: &'static str,
    /// Splits packed array items within a value
    pub array_item: &'static str,
    /// Splits an object payload into tuples
    pub object_tuple: &'static str,
    /// Splits a tuple into key and value
    pub object_key_value: &'static str,
}

impl StyleTemplate {
    const fn new(
        pair: &'static str,
        key_value: &'static str,
        array_item: &'static str,
        object_tuple: &'static str,
        object_key_value: &'static str,
    ) -> Self {
        Self {
            pair,
            key_value,
            array_item,
            object_tuple,
            object_key_value,
        }
    }

    /// Uniform template where every slot uses the same delimiter
    const fn uniform(delimiter: &'static str) -> Self {
        Self::new(delimiter, delimiter, delimiter, delimiter, delimiter)
    }

    /// Whether array items are packed into a single value
    #[must_use]
    pub fn packs_arrays(&self) -> bool {
        !self.array_item.is_empty()
    }

    /// Whether object tuples are positional pairs (`R,100,G,200`)
    #[must_use]
    pub fn positional_objects(&self) -> bool {
        self.object_key_value.is_empty()
    }

    /// The five delimiters in table order
    #[must_use]
    pub fn delimiters(&self) -> [&'static str; 5] {
        [
            self.pair,
            self.key_value,
            self.array_item,
            self.object_tuple,
            self.object_key_value,
        ]
    }
}

const MATRIX: StyleTemplate = StyleTemplate::new(";", "=", ",", ",", "");
const MATRIX_EXPLODED: StyleTemplate = StyleTemplate::new(";", "=", "", ";", "=");
const LABEL: StyleTemplate = StyleTemplate::new(".", ".", ".", ".", "");
const LABEL_EXPLODED: StyleTemplate = StyleTemplate::new(".", "", ".", "=", "");
const FORM: StyleTemplate = StyleTemplate::new("&", "=", ",", ",", "");
const FORM_EXPLODED: StyleTemplate = StyleTemplate::new("&", "=", "", "&", "=");
const SIMPLE: StyleTemplate = StyleTemplate::new(",", ",", "", ",", "");
const SIMPLE_EXPLODED: StyleTemplate = StyleTemplate::new(",", "", "", ",", "=");
const SPACE_DELIMITED: StyleTemplate = StyleTemplate::uniform("%20");
const PIPE_DELIMITED: StyleTemplate = StyleTemplate::uniform("|");
const DEEP_OBJECT_EXPLODED: StyleTemplate = StyleTemplate::new("&", "=", "", "&", "=");

/// Look up the template for a style and explode flag
///
/// Returns `None` for combinations the grammar does not define.
///
/// # Examples
///
/// ```
/// use param_style::{Style, lookup};
///
/// let template = lookup(Style::Form, true).expect("form is defined");
/// assert_eq!(template.pair, "&");
/// assert!(lookup(Style::DeepObject, false).is_none());
/// ```
#[must_use]
pub fn lookup(style: Style, explode: bool) -> Option<&'static StyleTemplate> {
    let template = match (style, explode) {
        (Style::Matrix, false) => &MATRIX,
        (Style::Matrix, true) => &MATRIX_EXPLODED,
        (Style::Label, false) => &LABEL,
        (Style::Label, true) => &LABEL_EXPLODED,
        (Style::Form, false) => &FORM,
        (Style::Form, true) => &FORM_EXPLODED,
        (Style::Simple, false) => &SIMPLE,
        (Style::Simple, true) => &SIMPLE_EXPLODED,
        (Style::SpaceDelimited, false) => &SPACE_DELIMITED,
        (Style::PipeDelimited, false) => &PIPE_DELIMITED,
        (Style::DeepObject, true) => &DEEP_OBJECT_EXPLODED,
        (Style::SpaceDelimited | Style::PipeDelimited, true) | (Style::DeepObject, false) => {
            return None;
        }
    };
    Some(template)
}

/// Every (style, explode) pair that has a template
pub fn defined_combinations() -> impl Iterator<Item = (Style, bool, &'static StyleTemplate)> {
    Style::ALL.into_iter().flat_map(|style| {
        [false, true]
            .into_iter()
            .filter_map(move |explode| lookup(style, explode).map(|t| (style, explode, t)))
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let rows = [
            (Style::Matrix, false, [";", "=", ",", ",", ""]),
            (Style::Matrix, true, [";", "=", "", ";", "="]),
            (Style::Label, false, [".", ".", ".", ".", ""]),
            (Style::Label, true, [".", "", ".", "=", ""]),
            (Style::Form, false, ["&", "=", ",", ",", ""]),
            (Style::Form, true, ["&", "=", "", "&", "="]),
            (Style::Simple, false, [",", ",", "", ",", ""]),
            (Style::Simple, true, [",", "", "", ",", "="]),
            (Style::SpaceDelimited, false, ["%20"; 5]),
            (Style::PipeDelimited, false, ["|"; 5]),
            (Style::DeepObject, true, ["&", "=", "", "&", "="]),
        ];

        for (style, explode, expected) in rows {
            let template = lookup(style, explode)
                .unwrap_or_else(|| panic!("{style} explode={explode} should be defined"));
            assert_eq!(template.delimiters(), expected, "{style} explode={explode}");
        }
    }

    #[test]
    fn test_undefined_combinations() {
        assert!(lookup(Style::SpaceDelimited, true).is_none());
        assert!(lookup(Style::PipeDelimited, true).is_none());
        assert!(lookup(Style::DeepObject, false).is_none());
    }

    #[test]
    fn test_defined_combinations() {
        assert_eq!(defined_combinations().count(), 11);
        assert!(
            defined_combinations().all(|(style, explode, t)| lookup(style, explode) == Some(t))
        );
    }

    #[test]
    fn test_slot_helpers() {
        let matrix = lookup(Style::Matrix, false).unwrap();
        assert!(matrix.packs_arrays());
        assert!(matrix.positional_objects());

        let form = lookup(Style::Form, true).unwrap();
        assert!(!form.packs_arrays());
        assert!(!form.positional_objects());
    }
}
