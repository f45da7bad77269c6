// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Cell edges.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BorderError;

/// One side of a rectangular cell boundary.
///
/// Variant order is the canonical order used for every deterministic read:
/// top, right, bottom, left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Edge {
    /// Top edge.
    Top = 0,
    /// Right edge.
    Right = 1,
    /// Bottom edge.
    Bottom = 2,
    /// Left edge.
    Left = 3,
}

impl Edge {
    /// All edges in canonical order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Storage slot for this edge (`0..4`).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Vocabulary name of this edge.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Parse a vocabulary name.
    ///
    /// Names are matched exactly; `"Top"` is rejected.
    pub fn from_name(name: &str) -> Result<Self, BorderError> {
        Self::ALL
            .into_iter()
            .find(|edge| edge.name() == name)
            .ok_or_else(|| BorderError::InvalidEdge {
                name: name.to_owned(),
            })
    }
}

impl FromStr for Edge {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
