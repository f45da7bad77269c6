// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-edge border descriptor.

use serde::{Deserialize, Serialize};

use crate::{BorderError, Color, Edge, LineStyle, StrokeWidth};

/// Styling of the border on one edge of a cell.
///
/// Immutable once built: fields are private and there are no setters. To
/// change one attribute, construct a new part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderPart {
    edge: Edge,
    #[serde(default)]
    color: Color,
    #[serde(default)]
    width: StrokeWidth,
    #[serde(default)]
    style: LineStyle,
}

impl BorderPart {
    /// Create a part from typed values. Never fails.
    pub const fn new(edge: Edge, color: Color, width: StrokeWidth, style: LineStyle) -> Self {
        Self {
            edge,
            color,
            width,
            style,
        }
    }

    /// Black, thin, solid part on `edge`.
    pub const fn for_edge(edge: Edge) -> Self {
        Self::new(edge, Color::BLACK, StrokeWidth::Thin, LineStyle::Solid)
    }

    /// Create a part from vocabulary names.
    ///
    /// Names are checked in a fixed order so that input with several bad
    /// fields always reports the same error: edge, then style, then width.
    ///
    /// ```
    /// use sheet_border::{BorderError, BorderPart, Color};
    ///
    /// let err = BorderPart::from_names("left", Color::BLACK, "huge", "wavy").unwrap_err();
    /// assert!(matches!(err, BorderError::InvalidStyle { .. }));
    /// ```
    pub fn from_names(
        edge: &str,
        color: Color,
        width: &str,
        style: &str,
    ) -> Result<Self, BorderError> {
        let edge = Edge::from_name(edge)?;
        let style = LineStyle::from_name(style)?;
        let width = StrokeWidth::from_name(width)?;
        Ok(Self::new(edge, color, width, style))
    }

    /// Edge this part applies to.
    pub const fn edge(&self) -> Edge {
        self.edge
    }

    /// Line color.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Stroke width.
    pub const fn width(&self) -> StrokeWidth {
        self.width
    }

    /// Line style.
    pub const fn style(&self) -> LineStyle {
        self.style
    }

    /// Every edge a part may be built for, in canonical order.
    pub const fn allowed_edges() -> &'static [Edge] {
        &Edge::ALL
    }

    /// Every line style a part may carry.
    pub const fn allowed_styles() -> &'static [LineStyle] {
        &LineStyle::ALL
    }

    /// Every stroke width a part may carry, thinnest first.
    pub const fn allowed_widths() -> &'static [StrokeWidth] {
        &StrokeWidth::ALL
    }
}
