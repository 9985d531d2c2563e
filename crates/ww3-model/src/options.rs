//! Engine configuration.
//!
//! Options only affect layout (whitespace, alignment, comments) and whether
//! the validation layer runs on load. Token spelling, quoting and ordering
//! are fixed by the schemas and never configurable.

use serde::{Deserialize, Serialize};

use crate::error::NamelistError;

/// Layout options for the canonical renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces before each `KEY = VALUE` line.
    pub indent: usize,

    /// Pad keys so the `=` signs of one block line up.
    pub align_values: bool,

    /// Emit an empty line between consecutive blocks.
    pub blank_line_between_blocks: bool,

    /// Optional `!` comment written above the first block.
    pub header_comment: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            align_values: true,
            blank_line_between_blocks: true,
            header_comment: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_align_values(mut self, enable: bool) -> Self {
        self.align_values = enable;
        self
    }

    #[must_use]
    pub fn with_blank_line_between_blocks(mut self, enable: bool) -> Self {
        self.blank_line_between_blocks = enable;
        self
    }

    #[must_use]
    pub fn with_header_comment(mut self, comment: impl Into<String>) -> Self {
        self.header_comment = Some(comment.into());
        self
    }
}

/// Options for the load entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Run the validation layer after coercion.
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}

impl LoadOptions {
    /// Coercion only: cross-field rules are left to the caller.
    pub fn coerce_only() -> Self {
        Self { validate: false }
    }
}

/// Top-level engine configuration, loadable from TOML:
///
/// ```toml
/// [render]
/// indent = 4
/// align_values = false
///
/// [load]
/// validate = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub render: RenderOptions,
    pub load: LoadOptions,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, NamelistError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.render.indent, 2);
        assert!(config.load.validate);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config = EngineConfig::from_toml_str(
            "[render]\nindent = 4\nheader_comment = \"generated\"\n\n[load]\nvalidate = false\n",
        )
        .unwrap();
        assert_eq!(config.render.indent, 4);
        assert!(config.render.align_values);
        assert_eq!(config.render.header_comment.as_deref(), Some("generated"));
        assert!(!config.load.validate);
    }

    #[test]
    fn unknown_types_are_rejected() {
        let err = EngineConfig::from_toml_str("[render]\nindent = \"wide\"\n").unwrap_err();
        assert!(matches!(err, NamelistError::Config(_)));
    }
}
