//! Named color palette iterated by the sample program.

use crate::errors::{Result, SampleError};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// The workbench colors, as written in the editor's sample script.
pub const AMIGA_COLORS: &[(&str, &str)] = &[
    ("amiga_gray", "#a0a0a0"),
    ("amiga_blue", "#0055aa"),
    ("amiga_orange", "#ffaa00"),
];

/// A validated `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Parse a `#` followed by exactly six hex digits.
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| SampleError::InvalidColor(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| SampleError::InvalidColor(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    pub name: String,
    pub hex: HexColor,
}

/// Mapping of color names to values, kept in declaration order.
///
/// Names are unique; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<ColorEntry>,
}

impl Palette {
    /// Build a palette from `(name, "#rrggbb")` pairs, preserving their order.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (name, hex) in pairs {
            if !seen.insert(name) {
                return Err(SampleError::DuplicateColor(name.to_string()));
            }
            entries.push(ColorEntry {
                name: name.to_string(),
                hex: HexColor::parse(hex)?,
            });
        }

        Ok(Self { entries })
    }

    /// The three workbench colors shown by the sample program.
    pub fn amiga() -> Result<Self> {
        Self::from_pairs(AMIGA_COLORS.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<HexColor> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.hex)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
