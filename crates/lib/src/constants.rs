//! Constants used throughout the recmap library.
//!
//! This module provides central definitions for the default tag scheme, the
//! reserved names and flags of the tag grammar, and structural limits.

/// Tag scheme consulted by [`crate::to_map`] and [`crate::from_map`].
pub const DEFAULT_TAG: &str = "map";

/// Tag name that excludes a field from mapping entirely.
pub const EXCLUDE: &str = "-";

/// Separator between the name and the flags of a tag string.
pub const TAG_SEPARATOR: char = ',';

/// Flag: skip the field when it holds its type's zero value.
pub const OMIT_EMPTY: &str = "omitempty";

/// Flag: flatten the field's sub-fields (or map entries) into the parent.
pub const INLINE: &str = "inline";

/// Default bound on how many inline levels the mapping builder descends.
pub const MAX_INLINE_DEPTH: usize = 32;
