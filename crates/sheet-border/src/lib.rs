// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Border style model for spreadsheet cells.
//!
//! This crate describes which sides of a cell carry a border and how each side
//! is drawn. It contains NO file-format logic; style serializers read a
//! [`Border`] and emit their own representation.
//!
//! # Design Principles
//!
//! - **Closed vocabularies** — [`Edge`], [`StrokeWidth`] and [`LineStyle`] are
//!   enums. Name-based construction ([`BorderPart::from_names`]) is the only
//!   path that can fail.
//! - **One part per edge** — [`Border`] stores at most one [`BorderPart`] per
//!   edge; adding a part for an occupied edge replaces it.
//! - **Deterministic reads** — parts are always yielded in canonical edge order
//!   (top, right, bottom, left), so serialized output is stable.
//!
//! # Example
//!
//! ```
//! use sheet_border::{BorderBuilder, Color, Edge, LineStyle, StrokeWidth};
//!
//! let border = BorderBuilder::new()
//!     .set_border_bottom()
//!     .set_border_top_with(Color::RED, StrokeWidth::Thick, LineStyle::Dashed)
//!     .build();
//!
//! assert_eq!(border.len(), 2);
//! assert_eq!(border.part(Edge::Top).map(|p| p.color()), Some(Color::RED));
//! ```

use thiserror::Error;

/// Validation failures raised while constructing border values from names.
///
/// Every variant aborts the construction call that produced it; no partial
/// value is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorderError {
    /// The edge name is not one of `top`, `right`, `bottom`, `left`.
    #[error("[BORDER_INVALID_EDGE] unknown edge name {name:?}")]
    InvalidEdge {
        /// The rejected name.
        name: String,
    },
    /// The line style name is not in the allowed style set.
    #[error("[BORDER_INVALID_STYLE] unknown line style {name:?}")]
    InvalidStyle {
        /// The rejected name.
        name: String,
    },
    /// The stroke width name is not in the allowed width set.
    #[error("[BORDER_INVALID_WIDTH] unknown stroke width {name:?}")]
    InvalidWidth {
        /// The rejected name.
        name: String,
    },
    /// The color string is not a six-digit `RRGGBB` hex value.
    #[error("[BORDER_INVALID_COLOR] expected RRGGBB hex color, got {value:?}")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },
}

mod border;
mod builder;
mod color;
pub mod config;
mod edge;
mod line;
mod part;

pub use border::{Border, Parts};
pub use builder::BorderBuilder;
pub use color::Color;
pub use config::{BorderDefaults, ConfigError};
pub use edge::Edge;
pub use line::{LineStyle, StrokeWidth};
pub use part::BorderPart;
