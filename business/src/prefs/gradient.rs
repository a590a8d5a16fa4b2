//! Persisted header gradient colors.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use super::store::PreferenceStore;

pub const GRADIENT_KEY: &str = "user_table_header_gradient";

pub const DEFAULT_GRADIENT_START: HexColor = HexColor::rgb(0x66, 0x7e, 0xea);
pub const DEFAULT_GRADIENT_END: HexColor = HexColor::rgb(0x76, 0x4b, 0xa2);

/// An opaque `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// Parse `#rrggbb` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid hex color: {value:?}"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Start/end colors of the table header gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGradient {
    pub start: HexColor,
    pub end: HexColor,
}

impl Default for HeaderGradient {
    fn default() -> Self {
        Self {
            start: DEFAULT_GRADIENT_START,
            end: DEFAULT_GRADIENT_END,
        }
    }
}

impl HeaderGradient {
    /// Stored colors, or the defaults when storage is empty or malformed.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let Some(raw) = store.get_string(GRADIENT_KEY) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("Ignoring malformed header gradient {raw:?}: {err}");
            Self::default()
        })
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) {
        match serde_json::to_string(self) {
            Ok(json) => store.set_string(GRADIENT_KEY, json),
            Err(err) => warn!("Failed to encode header gradient: {err}"),
        }
    }
}
