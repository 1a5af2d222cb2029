//! # Naming Conventions
//!
//! Map a model or field name to the name the backend stores it under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// A pluggable model-name to storage-name mapping.
///
/// Conventions compare by value. `Custom` conventions compare by name only,
/// so give distinct mappings distinct names.
#[derive(Clone, Copy)]
pub enum NamingConvention {
    /// `FileItem` -> `FileItem`
    Identity,
    /// `FileItem` -> `file_item`, `Admin::FileItem` -> `admin/file_item`
    Underscored,
    /// `FileItem` -> `file_items`
    UnderscoredAndPluralized,
    /// `Admin::FileItem` -> `file_items`
    UnderscoredAndPluralizedWithoutModule,
    Custom {
        name: &'static str,
        map: fn(&str) -> String,
    },
}

impl NamingConvention {
    /// Default for resource (model) names
    pub const RESOURCE_DEFAULT: NamingConvention = NamingConvention::UnderscoredAndPluralized;

    /// Default for field names
    pub const FIELD_DEFAULT: NamingConvention = NamingConvention::Underscored;

    /// Apply the convention to a model-level name
    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingConvention::Identity => name.to_string(),
            NamingConvention::Underscored => underscore(name),
            NamingConvention::UnderscoredAndPluralized => pluralize(&underscore(name)),
            NamingConvention::UnderscoredAndPluralizedWithoutModule => {
                let base = name.rsplit("::").next().unwrap_or(name);
                pluralize(&underscore(base))
            }
            NamingConvention::Custom { map, .. } => map(name),
        }
    }

    /// Name used in configuration files and logs
    pub fn label(&self) -> &'static str {
        match self {
            NamingConvention::Identity => "identity",
            NamingConvention::Underscored => "underscored",
            NamingConvention::UnderscoredAndPluralized => "underscored_and_pluralized",
            NamingConvention::UnderscoredAndPluralizedWithoutModule => {
                "underscored_and_pluralized_without_module"
            }
            NamingConvention::Custom { name, .. } => *name,
        }
    }
}

impl PartialEq for NamingConvention {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NamingConvention::Custom { name: a, .. }, NamingConvention::Custom { name: b, .. }) => {
                a == b
            }
            (NamingConvention::Custom { .. }, _) | (_, NamingConvention::Custom { .. }) => false,
            _ => self.label() == other.label(),
        }
    }
}

impl Eq for NamingConvention {}

impl fmt::Debug for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamingConvention({})", self.label())
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(NamingConvention::Identity),
            "underscored" => Ok(NamingConvention::Underscored),
            "underscored_and_pluralized" => Ok(NamingConvention::UnderscoredAndPluralized),
            "underscored_and_pluralized_without_module" => {
                Ok(NamingConvention::UnderscoredAndPluralizedWithoutModule)
            }
            other => Err(format!("Unknown naming convention: '{}'", other)),
        }
    }
}

/// Only the built-in conventions can be named in configuration
impl<'de> Deserialize<'de> for NamingConvention {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// `HTTPRequest` -> `http_request`, `Admin::FileItem` -> `admin/file_item`
fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == ':' && chars.get(i + 1) == Some(&':') {
            out.push('/');
            i += 2;
            continue;
        }
        if c.is_ascii_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.map_or(false, |n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '-' {
            out.push('_');
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{}es", word);
    }
    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        if before.map_or(false, |c| !"aeiou".contains(c)) {
            return format!("{}ies", stem);
        }
    }
    format!("{}s", word)
}
