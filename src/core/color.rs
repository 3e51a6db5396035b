//! Group colors
//!
//! The four color slots a player can assign words to. Each puzzle category is
//! tagged with exactly one of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four group colors, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Yellow,
    Green,
    Blue,
    Purple,
}

/// Error returned when parsing an unknown color name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color '{0}' (expected yellow, green, blue or purple)")]
pub struct UnknownColor(pub String);

impl GroupColor {
    /// All colors in submission order
    pub const ALL: [Self; 4] = [Self::Yellow, Self::Green, Self::Blue, Self::Purple];

    /// Lowercase name, as used in puzzle files and hint text
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Position in [`GroupColor::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GroupColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GroupColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yellow" | "y" => Ok(Self::Yellow),
            "green" | "g" => Ok(Self::Green),
            "blue" | "b" => Ok(Self::Blue),
            "purple" | "p" => Ok(Self::Purple),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}
