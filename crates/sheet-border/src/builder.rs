// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fluent construction of [`Border`] values.

use tracing::debug;

use crate::{Border, BorderDefaults, BorderPart, Color, Edge, LineStyle, StrokeWidth};

/// Stages one part per edge, then produces a [`Border`].
///
/// Edges that are never staged are absent from the result. Staging an edge a
/// second time overwrites the earlier settings. [`build`](Self::build) takes
/// `&self`, so the same builder can produce any number of independent borders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BorderBuilder {
    defaults: BorderDefaults,
    staged: [Option<BorderPart>; 4],
}

impl BorderBuilder {
    /// Builder whose argument-less setters use black, thin, solid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose argument-less setters use `defaults`.
    pub fn with_defaults(defaults: BorderDefaults) -> Self {
        Self {
            defaults,
            staged: [None; 4],
        }
    }

    /// Defaults used by the argument-less setters.
    pub const fn defaults(&self) -> BorderDefaults {
        self.defaults
    }

    /// Stage `edge` with explicit settings.
    pub fn set_border(
        &mut self,
        edge: Edge,
        color: Color,
        width: StrokeWidth,
        style: LineStyle,
    ) -> &mut Self {
        self.staged[edge.index()] = Some(BorderPart::new(edge, color, width, style));
        self
    }

    fn set_default(&mut self, edge: Edge) -> &mut Self {
        self.staged[edge.index()] = Some(self.defaults.part(edge));
        self
    }

    /// Stage the top edge with the builder defaults.
    pub fn set_border_top(&mut self) -> &mut Self {
        self.set_default(Edge::Top)
    }

    /// Stage the right edge with the builder defaults.
    pub fn set_border_right(&mut self) -> &mut Self {
        self.set_default(Edge::Right)
    }

    /// Stage the bottom edge with the builder defaults.
    pub fn set_border_bottom(&mut self) -> &mut Self {
        self.set_default(Edge::Bottom)
    }

    /// Stage the left edge with the builder defaults.
    pub fn set_border_left(&mut self) -> &mut Self {
        self.set_default(Edge::Left)
    }

    /// Stage the top edge.
    pub fn set_border_top_with(
        &mut self,
        color: Color,
        width: StrokeWidth,
        style: LineStyle,
    ) -> &mut Self {
        self.set_border(Edge::Top, color, width, style)
    }

    /// Stage the right edge.
    pub fn set_border_right_with(
        &mut self,
        color: Color,
        width: StrokeWidth,
        style: LineStyle,
    ) -> &mut Self {
        self.set_border(Edge::Right, color, width, style)
    }

    /// Stage the bottom edge.
    pub fn set_border_bottom_with(
        &mut self,
        color: Color,
        width: StrokeWidth,
        style: LineStyle,
    ) -> &mut Self {
        self.set_border(Edge::Bottom, color, width, style)
    }

    /// Stage the left edge.
    pub fn set_border_left_with(
        &mut self,
        color: Color,
        width: StrokeWidth,
        style: LineStyle,
    ) -> &mut Self {
        self.set_border(Edge::Left, color, width, style)
    }

    /// Drop any staged settings for `edge`.
    pub fn clear_border(&mut self, edge: Edge) -> &mut Self {
        self.staged[edge.index()] = None;
        self
    }

    /// Fresh border holding exactly the staged parts.
    pub fn build(&self) -> Border {
        let border = Border::from_parts(self.staged.iter().flatten().copied());
        debug!(parts = border.len(), "built border");
        border
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unset_edges_are_omitted() {
        let border = BorderBuilder::new().set_border_left().build();
        assert_eq!(border.len(), 1);
        assert!(border.part(Edge::Left).is_some());
        assert!(border.part(Edge::Top).is_none());
    }

    #[test]
    fn empty_builder_builds_empty_border() {
        assert!(BorderBuilder::new().build().is_empty());
    }

    #[test]
    fn second_call_for_same_edge_wins() {
        let border = BorderBuilder::new()
            .set_border_top_with(Color::RED, StrokeWidth::Thick, LineStyle::Double)
            .set_border_top()
            .build();
        assert_eq!(border.len(), 1);
        assert_eq!(
            border.part(Edge::Top),
            Some(&BorderPart::for_edge(Edge::Top))
        );
    }

    #[test]
    fn build_is_repeatable_and_independent() {
        let mut builder = BorderBuilder::new();
        builder.set_border_bottom();
        let mut first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);

        first.remove_part(Edge::Bottom);
        assert_eq!(builder.build(), second);
    }

    #[test]
    fn defaults_drive_plain_setters() {
        let defaults = BorderDefaults {
            color: Color::GREEN,
            width: StrokeWidth::Medium,
            style: LineStyle::Dotted,
        };
        let border = BorderBuilder::with_defaults(defaults)
            .set_border_right()
            .set_border_left_with(Color::BLACK, StrokeWidth::Thin, LineStyle::Solid)
            .build();
        assert_eq!(border.part(Edge::Right), Some(&defaults.part(Edge::Right)));
        assert_eq!(
            border.part(Edge::Left),
            Some(&BorderPart::for_edge(Edge::Left))
        );
    }

    #[test]
    fn clear_border_unstages() {
        let border = BorderBuilder::new()
            .set_border_top()
            .set_border_bottom()
            .clear_border(Edge::Top)
            .build();
        let edges: Vec<Edge> = border.parts().map(BorderPart::edge).collect();
        assert_eq!(edges, vec![Edge::Bottom]);
    }
}
