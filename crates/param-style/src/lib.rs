//! Decoder for OpenAPI v3 parameter styles
//!
//! OpenAPI describes how path, query, header and cookie parameters are
//! serialized with a `style` and an `explode` flag. This crate turns such a
//! serialized string back into values, driven by the shape the schema
//! declares for the parameter.
//!
//! # Supported Styles
//!
//! | style | explode | example |
//! |---|---|---|
//! | `matrix` | both | `;color=blue,black` / `;color=blue;color=black` |
//! | `label` | both | `.blue.black` |
//! | `form` | both | `color=blue,black` / `color=blue&color=black` |
//! | `simple` | both | `blue,black` / `R=100,G=200` |
//! | `spaceDelimited` | no | `blue%20black` |
//! | `pipeDelimited` | no | `blue\|black` |
//! | `deepObject` | yes | `color[R]=100&color[G]=200` |
//!
//! # Example
//!
//! ```
//! use param_style::{ParamBag, ParamShape, ParamValue, Params, decode};
//!
//! let mut bag = Params::new();
//! decode(
//!     "color[R]=100&color[G]=200",
//!     "deepObject",
//!     true,
//!     ParamShape::Object,
//!     &mut bag,
//! )?;
//!
//! let color = bag.get("color").and_then(ParamValue::as_map).expect("map");
//! assert_eq!(color.get("R").map(String::as_str), Some("100"));
//! assert_eq!(color.get("G").map(String::as_str), Some("200"));
//! # Ok::<(), param_style::DecodeError>(())
//! ```
//!
//! Values are not percent-decoded and not coerced to numbers or booleans.
//! Unknown styles decode to nothing unless the decoder is configured with
//! [`DecoderConfig::strict`].

#![warn(missing_docs)]

mod bag;
pub mod bracket;
mod config;
mod decoder;
mod error;
mod style;
mod template;
mod value;

pub use bag::{ParamBag, Params};
pub use config::{DecoderConfig, UndefinedTemplatePolicy};
pub use decoder::{Decoder, decode, decode_with_template};
pub use error::{DecodeError, Result};
pub use style::{ParamShape, Style};
pub use template::{StyleTemplate, defined_combinations, lookup};
pub use value::{ParamMap, ParamValue};
