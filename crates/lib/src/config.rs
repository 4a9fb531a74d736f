//! Conversion settings.
//!
//! A [`MapperConfig`] selects the tag schemes a conversion reads, how strictly
//! recoverable problems are treated, and how deep inlining may nest. It can be
//! built in code or loaded from JSON:
//!
//! ```
//! # use recmap::{MapperConfig, Mode};
//! let config = MapperConfig::from_json(r#"{"name_tag": "json", "mode": "strict"}"#).unwrap();
//!
//! assert_eq!(config.name_tag(), "json");
//! assert_eq!(config.filter_tag(), "json");
//! assert_eq!(config.mode, Mode::Strict);
//! ```

use crate::{Result, constants};

/// How conversions treat recoverable problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Ignore unsettable fields, kind mismatches, unmatched keys, unusable
    /// inline flags and overshadowed catch-alls, logging each one.
    #[default]
    Lenient,
    /// Report each of them as an error and stop the conversion.
    Strict,
}

/// Settings for a [`Mapper`](crate::Mapper).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Tag scheme that supplies external names and flags
    pub name_tag: String,
    /// Tag scheme a field must carry to be mapped at all; empty means
    /// `name_tag`
    pub filter_tag: String,
    pub mode: Mode,
    /// Maximum number of nested inline levels
    pub max_inline_depth: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            name_tag: constants::DEFAULT_TAG.to_string(),
            filter_tag: String::new(),
            mode: Mode::default(),
            max_inline_depth: constants::MAX_INLINE_DEPTH,
        }
    }
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration reading names from `name_tag` and selecting fields by
    /// `filter_tag`.
    pub fn tagged(name_tag: impl Into<String>, filter_tag: impl Into<String>) -> Self {
        Self {
            name_tag: name_tag.into(),
            filter_tag: filter_tag.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_inline_depth(mut self, depth: usize) -> Self {
        self.max_inline_depth = depth;
        self
    }

    /// Loads a configuration from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name_tag(&self) -> &str {
        &self.name_tag
    }

    /// The effective filter scheme.
    pub fn filter_tag(&self) -> &str {
        if self.filter_tag.is_empty() {
            &self.name_tag
        } else {
            &self.filter_tag
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }
}
