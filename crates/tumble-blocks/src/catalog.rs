//! The fixed table of the 24 dice orientations.
//!
//! Each entry names the face that ends up on top, the face that ends up in front, and the
//! yaw/pitch/roll that gets it there from the canonical TOP/FRONT pose. Entries are grouped by
//! top face in [`TOP_ORDER`]; within a group the yaw steps through the four quarter turns.

use tumble_geom::{Face, Rotation, Turn};

use crate::error::BlockError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrientationEntry {
    pub top: Face,
    pub front: Face,
    pub rotation: Rotation,
}

impl OrientationEntry {
    pub const fn new(top: Face, front: Face, rotation: Rotation) -> Self {
        Self {
            top,
            front,
            rotation,
        }
    }

    /// Stable addressing key, e.g. `"TOP-FRONT"`.
    pub fn identifier(&self) -> String {
        format!("{}-{}", self.top.name(), self.front.name())
    }

    /// World facing of the block's own FRONT once this rotation is applied.
    #[inline]
    pub fn direction(&self) -> Face {
        self.rotation.apply(Face::Front)
    }
}

/// Top-face group order used when iterating the table.
pub const TOP_ORDER: [Face; 6] = [
    Face::Top,
    Face::Front,
    Face::Right,
    Face::Left,
    Face::Back,
    Face::Bottom,
];

const T0: Turn = Turn::None;
const T90: Turn = Turn::Clockwise90;
const T180: Turn = Turn::Clockwise180;
const T270: Turn = Turn::Clockwise270;

const fn e(top: Face, front: Face, yaw: Turn, pitch: Turn, roll: Turn) -> OrientationEntry {
    OrientationEntry::new(top, front, Rotation::new(yaw, pitch, roll))
}

static STANDARD: [OrientationEntry; 24] = [
    // TOP stays on top; yaw spins the front.
    e(Face::Top, Face::Front, T0, T0, T0),
    e(Face::Top, Face::Right, T90, T0, T0),
    e(Face::Top, Face::Back, T180, T0, T0),
    e(Face::Top, Face::Left, T270, T0, T0),
    // FRONT on top: pitch 90.
    e(Face::Front, Face::Bottom, T0, T90, T0),
    e(Face::Front, Face::Back, T90, T90, T0),
    e(Face::Front, Face::Top, T180, T90, T0),
    e(Face::Front, Face::Front, T270, T90, T0),
    // RIGHT on top: roll 270.
    e(Face::Right, Face::Front, T0, T0, T270),
    e(Face::Right, Face::Bottom, T90, T0, T270),
    e(Face::Right, Face::Back, T180, T0, T270),
    e(Face::Right, Face::Top, T270, T0, T270),
    // LEFT on top: roll 90.
    e(Face::Left, Face::Front, T0, T0, T90),
    e(Face::Left, Face::Top, T90, T0, T90),
    e(Face::Left, Face::Back, T180, T0, T90),
    e(Face::Left, Face::Bottom, T270, T0, T90),
    // BACK on top: pitch 270.
    e(Face::Back, Face::Top, T0, T270, T0),
    e(Face::Back, Face::Right, T90, T270, T0),
    e(Face::Back, Face::Bottom, T180, T270, T0),
    e(Face::Back, Face::Left, T270, T270, T0),
    // BOTTOM on top: pitch 180.
    e(Face::Bottom, Face::Front, T0, T180, T0),
    e(Face::Bottom, Face::Left, T90, T180, T0),
    e(Face::Bottom, Face::Back, T180, T180, T0),
    e(Face::Bottom, Face::Right, T270, T180, T0),
];

/// Read-only view over an orientation table.
#[derive(Clone, Copy, Debug)]
pub struct OrientationCatalog {
    entries: &'static [OrientationEntry],
}

impl OrientationCatalog {
    /// The 24-entry dice table.
    pub const fn standard() -> Self {
        Self { entries: &STANDARD }
    }

    /// Wraps a custom table. Entries are used as given; lookups take the first match.
    pub const fn from_entries(entries: &'static [OrientationEntry]) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &'static [OrientationEntry] {
        self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_for(&self, top: Face, front: Face) -> Option<&'static OrientationEntry> {
        self.entries
            .iter()
            .find(|e| e.top == top && e.front == front)
    }

    pub fn rotation_for(&self, top: Face, front: Face) -> Result<Rotation, BlockError> {
        self.entry_for(top, front)
            .map(|e| e.rotation)
            .ok_or(BlockError::UnknownOrientation { top, front })
    }

    /// Entries with `top` on top, in table order.
    pub fn group(&self, top: Face) -> impl Iterator<Item = &'static OrientationEntry> {
        self.entries.iter().filter(move |e| e.top == top)
    }
}

impl Default for OrientationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Looks up the rotation in the standard table.
pub fn rotation_for(top: Face, front: Face) -> Result<Rotation, BlockError> {
    OrientationCatalog::standard().rotation_for(top, front)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_grouped_in_top_order() {
        let cat = OrientationCatalog::standard();
        let tops: Vec<Face> = cat.entries().chunks(4).map(|g| g[0].top).collect();
        assert_eq!(tops, TOP_ORDER.to_vec());
        for group in cat.entries().chunks(4) {
            assert!(group.iter().all(|e| e.top == group[0].top));
        }
    }

    #[test]
    fn groups_have_distinct_fronts_and_rotations() {
        let cat = OrientationCatalog::standard();
        for top in TOP_ORDER {
            let fronts: HashSet<Face> = cat.group(top).map(|e| e.front).collect();
            let rots: HashSet<Rotation> = cat.group(top).map(|e| e.rotation).collect();
            assert_eq!(fronts.len(), 4, "{top}");
            assert_eq!(rots.len(), 4, "{top}");
        }
    }

    #[test]
    fn unknown_pair_is_an_error() {
        let err = rotation_for(Face::Top, Face::Bottom).unwrap_err();
        assert!(matches!(
            err,
            BlockError::UnknownOrientation {
                top: Face::Top,
                front: Face::Bottom
            }
        ));
    }
}
