// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Configurable defaults for the border builder.
//!
//! Writers that want a house style (say, medium grey borders) load a
//! [`BorderDefaults`] blob once and hand it to
//! [`BorderBuilder::with_defaults`](crate::BorderBuilder::with_defaults).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BorderPart, Color, Edge, LineStyle, StrokeWidth};

/// Error type for loading and saving border defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization/deserialization failure, including unknown vocabulary names.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Color, width and style applied to edges staged without explicit values.
///
/// Every field is optional in JSON; a missing field takes the built-in
/// default (black, thin, solid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderDefaults {
    /// Line color.
    pub color: Color,
    /// Stroke width.
    pub width: StrokeWidth,
    /// Line style.
    pub style: LineStyle,
}

impl BorderDefaults {
    /// Load defaults from a JSON blob. Empty input yields the built-in defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Part on `edge` drawn with these defaults.
    pub const fn part(&self, edge: Edge) -> BorderPart {
        BorderPart::new(edge, self.color, self.width, self.style)
    }
}
