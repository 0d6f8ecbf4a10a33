//! Error types for parameter decoding

use thiserror::Error;

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding a serialized parameter
///
/// The grammar itself never fails. These variants are only produced when the
/// decoder is configured to reject undefined templates, see
/// [`UndefinedTemplatePolicy`](crate::UndefinedTemplatePolicy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Style identifier is not one of the seven OpenAPI styles
    #[error("Unknown parameter style: {style}")]
    UnknownStyle {
        /// Identifier as supplied by the caller
        style: String,
    },

    /// Style is known but has no template for the requested explode flag
    #[error("Style {style} does not support explode={explode}")]
    UnsupportedExplode {
        /// Style identifier
        style: String,
        /// Requested explode flag
        explode: bool,
    },
}

impl DecodeError {
    /// Whether the error was caused by the style identifier itself
    #[must_use]
    pub fn is_unknown_style(&self) -> bool {
        matches!(self, Self::UnknownStyle { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DecodeError::UnknownStyle {
            style: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown parameter style: bogus");
        assert!(err.is_unknown_style());

        let err = DecodeError::UnsupportedExplode {
            style: "deepObject".to_string(),
            explode: false,
        };
        assert_eq!(
            err.to_string(),
            "Style deepObject does not support explode=false"
        );
        assert!(!err.is_unknown_style());
    }
}
