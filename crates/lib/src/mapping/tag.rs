//! Parsing of field tag strings.
//!
//! A tag string has the form `name[,flag]*`. The name is the external key of
//! the field (the declared name when empty, excluded when `-`), and the flags
//! select behavior during mapping.

use std::collections::BTreeSet;

use crate::{
    Field,
    constants::{INLINE, OMIT_EMPTY, TAG_SEPARATOR},
};

/// A single tag flag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    /// Skip the field when it holds its zero value
    OmitEmpty,
    /// Flatten the field into its parent
    Inline,
    /// Any other flag; kept so the set reflects the tag, otherwise ignored
    Other(String),
}

impl Flag {
    pub fn parse(flag: &str) -> Self {
        match flag {
            OMIT_EMPTY => Flag::OmitEmpty,
            INLINE => Flag::Inline,
            other => Flag::Other(other.to_string()),
        }
    }
}

/// The unordered set of flags of one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeSet<Flag>);

impl Flags {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, flag: &Flag) -> bool {
        self.0.contains(flag)
    }

    pub fn omit_empty(&self) -> bool {
        self.contains(&Flag::OmitEmpty)
    }

    pub fn inline(&self) -> bool {
        self.contains(&Flag::Inline)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.0.iter()
    }
}

impl<'a> FromIterator<&'a str> for Flags {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Flags(iter.into_iter().map(Flag::parse).collect())
    }
}

/// Resolves the external name and flags of `field` under `scheme`.
pub fn parse_name_and_flags(field: &Field<'_>, scheme: &str) -> (String, Flags) {
    let mut segments = field.tag(scheme).split(TAG_SEPARATOR);
    let name = match segments.next() {
        Some(name) if !name.is_empty() => name,
        _ => field.name(),
    };

    (name.to_string(), segments.collect())
}
