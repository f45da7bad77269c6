// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stroke width and line style vocabularies.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BorderError;

/// Stroke width of a border line.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StrokeWidth {
    /// Thinnest stroke.
    #[default]
    Thin,
    /// Medium stroke.
    Medium,
    /// Thickest stroke.
    Thick,
}

impl StrokeWidth {
    /// All widths, thinnest first.
    pub const ALL: [Self; 3] = [Self::Thin, Self::Medium, Self::Thick];

    /// Vocabulary name of this width.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Thick => "thick",
        }
    }

    /// Parse a vocabulary name.
    pub fn from_name(name: &str) -> Result<Self, BorderError> {
        Self::ALL
            .into_iter()
            .find(|width| width.name() == name)
            .ok_or_else(|| BorderError::InvalidWidth {
                name: name.to_owned(),
            })
    }
}

impl FromStr for StrokeWidth {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line style of a border.
///
/// `None` declares the edge without drawing it; writers still emit the edge
/// so that it overrides any inherited border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Edge declared, nothing drawn.
    None,
    /// Continuous line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Two parallel lines.
    Double,
}

impl LineStyle {
    /// All styles.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Solid,
        Self::Dashed,
        Self::Dotted,
        Self::Double,
    ];

    /// Vocabulary name of this style.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
        }
    }

    /// Parse a vocabulary name.
    pub fn from_name(name: &str) -> Result<Self, BorderError> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| BorderError::InvalidStyle {
                name: name.to_owned(),
            })
    }

    /// `true` for every style that puts ink on the page.
    #[must_use]
    pub const fn is_drawn(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for LineStyle {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_thin_and_solid() {
        assert_eq!(StrokeWidth::default(), StrokeWidth::Thin);
        assert_eq!(LineStyle::default(), LineStyle::Solid);
    }

    #[test]
    fn default_width_is_the_thinnest() {
        assert_eq!(StrokeWidth::ALL.iter().min(), Some(&StrokeWidth::default()));
    }

    #[test]
    fn names_parse_back() {
        for width in StrokeWidth::ALL {
            assert_eq!(width.to_string().parse::<StrokeWidth>().unwrap(), width);
        }
        for style in LineStyle::ALL {
            assert_eq!(style.to_string().parse::<LineStyle>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_names_map_to_their_own_error() {
        assert!(matches!(
            StrokeWidth::from_name("hairline"),
            Err(BorderError::InvalidWidth { .. })
        ));
        assert!(matches!(
            LineStyle::from_name("wavy"),
            Err(BorderError::InvalidStyle { .. })
        ));
    }

    #[test]
    fn only_none_is_not_drawn() {
        let undrawn: Vec<_> = LineStyle::ALL.into_iter().filter(|s| !s.is_drawn()).collect();
        assert_eq!(undrawn, vec![LineStyle::None]);
    }
}
