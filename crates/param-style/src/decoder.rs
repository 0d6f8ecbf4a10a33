//! Style-directed parameter decoder
//!
//! The decoder walks the raw input once. It cuts the input into segments at
//! the template's pair delimiter, splits every segment into a name and a
//! value, and stores the value according to the shape declared by the
//! caller:
//!
//! ```text
//! ;color=blue;color=black      matrix, explode, Array
//!  '---.----' '----.----'
//!   segment     segment        -> color = [blue, black]
//! ```
//!
//! Objects need extra care because the grammar is lossy:
//!
//! - exploded matrix and form objects drop the parameter name, so every
//!   key becomes its own parameter (`;R=100;G=200` -> `R`, `G`)
//! - deepObject carries the key in the name (`color[R]=100`)
//! - a payload without any internal structure is not an object at all and
//!   is stored as a scalar

use crate::bag::ParamBag;
use crate::bracket::split_bracketed;
use crate::config::{DecoderConfig, UndefinedTemplatePolicy};
use crate::error::{DecodeError, Result};
use crate::style::{ParamShape, Style};
use crate::template::{StyleTemplate, lookup};
use crate::value::ParamValue;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Decode a serialized parameter into a bag using the default configuration
///
/// Unknown styles and undefined explode combinations leave the bag untouched
/// and return `Ok(())`.
///
/// # Examples
///
/// ```
/// use param_style::{ParamShape, ParamValue, Params, ParamBag, decode};
///
/// let mut bag = Params::new();
/// decode("color=blue&color=black", "form", true, ParamShape::Array, &mut bag)?;
///
/// assert_eq!(
///     bag.get("color"),
///     Some(&ParamValue::List(vec!["blue".into(), "black".into()]))
/// );
/// # Ok::<(), param_style::DecodeError>(())
/// ```
pub fn decode<B: ParamBag + ?Sized>(
    input: &str,
    style: &str,
    explode: bool,
    shape: ParamShape,
    bag: &mut B,
) -> Result<()> {
    Decoder::default().decode(input, style, explode, shape, bag)
}

/// Parameter decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the given configuration
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode using a style identifier such as `"deepObject"`
    pub fn decode<B: ParamBag + ?Sized>(
        &self,
        input: &str,
        style: &str,
        explode: bool,
        shape: ParamShape,
        bag: &mut B,
    ) -> Result<()> {
        let Some(parsed) = Style::parse(style) else {
            debug!(style, "Unknown parameter style");
            return match self.config.undefined_template {
                UndefinedTemplatePolicy::Ignore => Ok(()),
                UndefinedTemplatePolicy::Reject => Err(DecodeError::UnknownStyle {
                    style: style.to_string(),
                }),
            };
        };

        self.decode_style(input, parsed, explode, shape, bag)
    }

    /// Decode using a parsed [`Style`]
    pub fn decode_style<B: ParamBag + ?Sized>(
        &self,
        input: &str,
        style: Style,
        explode: bool,
        shape: ParamShape,
        bag: &mut B,
    ) -> Result<()> {
        let Some(template) = lookup(style, explode) else {
            debug!(%style, explode, "No template for style");
            return match self.config.undefined_template {
                UndefinedTemplatePolicy::Ignore => Ok(()),
                UndefinedTemplatePolicy::Reject => Err(DecodeError::UnsupportedExplode {
                    style: style.to_string(),
                    explode,
                }),
            };
        };

        decode_with_template(input, template, shape, bag);
        Ok(())
    }
}

/// Decode against an explicit template
///
/// This is the grammar itself and cannot fail.
pub fn decode_with_template<B: ParamBag + ?Sized>(
    input: &str,
    template: &StyleTemplate,
    shape: ParamShape,
    bag: &mut B,
) {
    for segment in Segments::new(input, template.pair) {
        let (name, value) = split_segment(segment, template.key_value);
        trace!(segment, param = name, value, ?shape, "Decoding segment");

        match shape {
            ParamShape::Empty => bag.set(name, ParamValue::None),
            ParamShape::Primitive => bag.set(name, ParamValue::Scalar(value.to_string())),
            ParamShape::Array => decode_array(name, value, template, bag),
            ParamShape::Object => decode_object(name, value, template, bag),
        }
    }
}

/// Non-empty segments of the input, cut at the pair delimiter
struct Segments<'a> {
    rest: &'a str,
    delimiter: &'static str,
}

impl<'a> Segments<'a> {
    fn new(input: &'a str, delimiter: &'static str) -> Self {
        Self {
            rest: input,
            delimiter,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let (segment, rest) = if self.delimiter.is_empty() {
                (self.rest, "")
            } else {
                self.rest
                    .split_once(self.delimiter)
                    .unwrap_or((self.rest, ""))
            };
            self.rest = rest;

            if !segment.is_empty() {
                return Some(segment);
            }
        }
        None
    }
}

/// Split a segment into name and value
///
/// Without a key/value delimiter the whole segment is the value and the
/// name is empty.
fn split_segment<'a>(segment: &'a str, delimiter: &str) -> (&'a str, &'a str) {
    if delimiter.is_empty() {
        return ("", segment);
    }
    segment.split_once(delimiter).unwrap_or((segment, ""))
}

fn decode_array<B: ParamBag + ?Sized>(
    name: &str,
    value: &str,
    template: &StyleTemplate,
    bag: &mut B,
) {
    if !template.packs_arrays() {
        bag.add(name, value.to_string());
        return;
    }

    for item in value.split(template.array_item) {
        bag.add(name, item.to_string());
    }
}

fn decode_object<B: ParamBag + ?Sized>(
    name: &str,
    value: &str,
    template: &StyleTemplate,
    bag: &mut B,
) {
    let bracketed = split_bracketed(name);
    let (name, value) = match &bracketed {
        Some(bracket) => (bracket.base.as_str(), Cow::Owned(bracket.to_tuple(value))),
        None => (name, Cow::Borrowed(value)),
    };

    let tuples: Vec<&str> = value.split(template.object_tuple).collect();

    let keyed = !template.positional_objects() && value.contains(template.object_key_value);
    if tuples.len() <= 1 && !keyed {
        debug!(
            param = name,
            value = %value,
            "Object payload has no structure, storing as scalar"
        );
        bag.set(name, ParamValue::Scalar(value.to_string()));
        return;
    }

    if let Some(existing) = bag.get(name)
        && !matches!(existing, ParamValue::Map(_))
    {
        debug!(
            param = name,
            replaced = existing.kind(),
            "Replacing value with object"
        );
    }

    let entries: Vec<(String, String)> = if template.positional_objects() {
        tuples
            .chunks_exact(2)
            .filter_map(|pair| match pair {
                [key, val] => Some(((*key).to_string(), (*val).to_string())),
                _ => None,
            })
            .collect()
    } else {
        tuples
            .iter()
            .map(|&tuple| {
                let (key, val) = tuple
                    .split_once(template.object_key_value)
                    .unwrap_or((tuple, ""));
                (key.to_string(), val.to_string())
            })
            .collect()
    };

    bag.merge(name, entries);
}
