// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Edge-keyed collection of border parts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{BorderPart, Edge};

/// The border of one cell: at most one [`BorderPart`] per [`Edge`].
///
/// Parts live in a fixed array indexed by [`Edge::index`], so the collection
/// can never hold more than four entries and a part is always stored under
/// its own edge. Adding a part for an occupied edge replaces the old one.
///
/// # Determinism
///
/// Every read ([`parts`](Border::parts), [`to_map`](Border::to_map), serde
/// output) yields parts in canonical edge order: top, right, bottom, left.
/// Equality and hashing are by value, so two borders built along different
/// paths compare equal when they end up with the same parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<BorderPart>", into = "Vec<BorderPart>")]
pub struct Border {
    slots: [Option<BorderPart>; 4],
}

impl Border {
    /// Create a border with no parts.
    pub const fn new() -> Self {
        Self { slots: [None; 4] }
    }

    /// Create a border by adding each part in order.
    ///
    /// Later parts replace earlier parts for the same edge.
    pub fn from_parts<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = BorderPart>,
    {
        let mut border = Self::new();
        border.extend(parts);
        border
    }

    /// Insert `part` under its edge, replacing any existing part there.
    ///
    /// Returns `self` so calls can be chained.
    pub fn add_part(&mut self, part: BorderPart) -> &mut Self {
        let slot = &mut self.slots[part.edge().index()];
        if let Some(previous) = slot.replace(part) {
            trace!(edge = %previous.edge(), "replaced border part");
        }
        self
    }

    /// Discard every part, then add each of `parts` in order.
    pub fn set_parts<I>(&mut self, parts: I)
    where
        I: IntoIterator<Item = BorderPart>,
    {
        self.slots = [None; 4];
        self.extend(parts);
    }

    /// Remove and return the part on `edge`, if any.
    pub fn remove_part(&mut self, edge: Edge) -> Option<BorderPart> {
        self.slots[edge.index()].take()
    }

    /// Part on `edge`, if any.
    pub fn part(&self, edge: Edge) -> Option<&BorderPart> {
        self.slots[edge.index()].as_ref()
    }

    /// Stored parts in canonical edge order.
    pub fn parts(&self) -> Parts<'_> {
        Parts {
            inner: self.slots.iter().flatten(),
        }
    }

    /// Copy of the stored parts keyed by edge.
    pub fn to_map(&self) -> BTreeMap<Edge, BorderPart> {
        self.parts().map(|part| (part.edge(), *part)).collect()
    }

    /// Number of edges that carry a part (`0..=4`).
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// `true` when no edge carries a part.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Extend<BorderPart> for Border {
    fn extend<I: IntoIterator<Item = BorderPart>>(&mut self, iter: I) {
        for part in iter {
            self.add_part(part);
        }
    }
}

impl FromIterator<BorderPart> for Border {
    fn from_iter<I: IntoIterator<Item = BorderPart>>(iter: I) -> Self {
        Self::from_parts(iter)
    }
}

impl From<Vec<BorderPart>> for Border {
    fn from(parts: Vec<BorderPart>) -> Self {
        Self::from_parts(parts)
    }
}

impl From<Border> for Vec<BorderPart> {
    fn from(border: Border) -> Self {
        border.parts().copied().collect()
    }
}

/// Iterator over the parts of a [`Border`] in canonical edge order.
#[derive(Clone, Debug)]
pub struct Parts<'a> {
    inner: core::iter::Flatten<core::slice::Iter<'a, Option<BorderPart>>>,
}

impl<'a> Iterator for Parts<'a> {
    type Item = &'a BorderPart;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
