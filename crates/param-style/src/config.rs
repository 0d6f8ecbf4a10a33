//! Decoder configuration

/// What to do when no template exists for a (style, explode) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UndefinedTemplatePolicy {
    /// Decode to nothing and report success
    #[default]
    Ignore,
    /// Return [`DecodeError::UnknownStyle`](crate::DecodeError::UnknownStyle)
    /// or [`DecodeError::UnsupportedExplode`](crate::DecodeError::UnsupportedExplode)
    Reject,
}

/// Decoder configuration
///
/// The default configuration is fail-soft: unknown styles leave the bag
/// untouched and the decode call succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderConfig {
    /// Handling of undefined (style, explode) pairs
    pub undefined_template: UndefinedTemplatePolicy,
}

impl DecoderConfig {
    /// Create the default fail-soft configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that rejects undefined templates
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_undefined_template(UndefinedTemplatePolicy::Reject)
    }

    /// Set the undefined template policy
    #[must_use]
    pub fn with_undefined_template(mut self, policy: UndefinedTemplatePolicy) -> Self {
        self.undefined_template = policy;
        self
    }

    /// Check if undefined templates are reported as errors
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.undefined_template == UndefinedTemplatePolicy::Reject
    }
}
