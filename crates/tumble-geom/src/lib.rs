//! Cube faces, quarter-turn rotations, and integer grid vectors (no engine dependencies).
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::Add;
use core::str::FromStr;

/// Integer grid position or offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const ZERO: Vec3i = Vec3i { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3i {
    type Output = Vec3i;
    #[inline]
    fn add(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for Vec3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six block-relative faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Upper-case name used in block identifiers (`"TOP"`, `"FRONT"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Face::Top => "TOP",
            Face::Bottom => "BOTTOM",
            Face::Front => "FRONT",
            Face::Back => "BACK",
            Face::Left => "LEFT",
            Face::Right => "RIGHT",
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    /// Unit grid step out of this face. FRONT looks down -Z.
    #[inline]
    pub fn vector(self) -> Vec3i {
        match self {
            Face::Top => Vec3i::new(0, 1, 0),
            Face::Bottom => Vec3i::new(0, -1, 0),
            Face::Front => Vec3i::new(0, 0, -1),
            Face::Back => Vec3i::new(0, 0, 1),
            Face::Left => Vec3i::new(-1, 0, 0),
            Face::Right => Vec3i::new(1, 0, 0),
        }
    }

    pub fn from_vector(v: Vec3i) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.vector() == v)
    }

    // Quarter turn about the vertical axis: RIGHT -> FRONT -> LEFT -> BACK.
    #[inline]
    fn yaw_quarter(self) -> Face {
        match self {
            Face::Right => Face::Front,
            Face::Front => Face::Left,
            Face::Left => Face::Back,
            Face::Back => Face::Right,
            f => f,
        }
    }

    // Quarter turn about the LEFT/RIGHT axis: FRONT -> TOP -> BACK -> BOTTOM.
    #[inline]
    fn pitch_quarter(self) -> Face {
        match self {
            Face::Front => Face::Top,
            Face::Top => Face::Back,
            Face::Back => Face::Bottom,
            Face::Bottom => Face::Front,
            f => f,
        }
    }

    // Quarter turn about the FRONT/BACK axis: TOP -> RIGHT -> BOTTOM -> LEFT.
    #[inline]
    fn roll_quarter(self) -> Face {
        match self {
            Face::Top => Face::Right,
            Face::Right => Face::Bottom,
            Face::Bottom => Face::Left,
            Face::Left => Face::Top,
            f => f,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFaceError {
    pub input: String,
}

impl fmt::Display for ParseFaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown face name {:?}", self.input)
    }
}

impl std::error::Error for ParseFaceError {}

impl FromStr for Face {
    type Err = ParseFaceError;

    /// Exact, case-sensitive match on [`Face::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ParseFaceError {
                input: s.to_string(),
            })
    }
}

/// A discrete clockwise rotation step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Turn {
    #[default]
    None = 0,
    Clockwise90 = 1,
    Clockwise180 = 2,
    Clockwise270 = 3,
}

impl Turn {
    pub const ALL: [Turn; 4] = [
        Turn::None,
        Turn::Clockwise90,
        Turn::Clockwise180,
        Turn::Clockwise270,
    ];

    #[inline]
    pub fn quarters(self) -> u8 {
        self as u8
    }

    /// Wraps modulo four.
    #[inline]
    pub fn from_quarters(q: u8) -> Turn {
        Turn::ALL[(q % 4) as usize]
    }

    #[inline]
    pub fn degrees(self) -> u16 {
        self.quarters() as u16 * 90
    }

    pub fn from_degrees(deg: u16) -> Option<Turn> {
        match deg {
            0 => Some(Turn::None),
            90 => Some(Turn::Clockwise90),
            180 => Some(Turn::Clockwise180),
            270 => Some(Turn::Clockwise270),
            _ => None,
        }
    }
}

/// Yaw/pitch/roll made of quarter turns.
///
/// Applying a rotation to a face answers "where does this block-local face end up":
/// roll is applied first, then pitch, then yaw. A clockwise roll turns TOP toward RIGHT,
/// a clockwise pitch turns FRONT toward TOP and a clockwise yaw turns RIGHT toward FRONT.
///
/// Two rotations compare equal only when all three components match; use
/// [`Rotation::is_equivalent`] to compare the resulting orientation instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Rotation {
    pub yaw: Turn,
    pub pitch: Turn,
    pub roll: Turn,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation::new(Turn::None, Turn::None, Turn::None);

    #[inline]
    pub const fn new(yaw: Turn, pitch: Turn, roll: Turn) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn from_degrees(yaw: u16, pitch: u16, roll: u16) -> Option<Self> {
        Some(Self::new(
            Turn::from_degrees(yaw)?,
            Turn::from_degrees(pitch)?,
            Turn::from_degrees(roll)?,
        ))
    }

    /// All 64 component triples, yaw-major then pitch then roll.
    pub fn all() -> impl Iterator<Item = Rotation> {
        Turn::ALL.into_iter().flat_map(|yaw| {
            Turn::ALL.into_iter().flat_map(move |pitch| {
                Turn::ALL
                    .into_iter()
                    .map(move |roll| Rotation::new(yaw, pitch, roll))
            })
        })
    }

    pub fn apply(self, face: Face) -> Face {
        let mut f = face;
        for _ in 0..self.roll.quarters() {
            f = f.roll_quarter();
        }
        for _ in 0..self.pitch.quarters() {
            f = f.pitch_quarter();
        }
        for _ in 0..self.yaw.quarters() {
            f = f.yaw_quarter();
        }
        f
    }

    /// True when both rotations place every face identically.
    #[inline]
    pub fn is_equivalent(self, other: Rotation) -> bool {
        // TOP and FRONT pin down a cube rotation.
        self.apply(Face::Top) == other.apply(Face::Top)
            && self.apply(Face::Front) == other.apply(Face::Front)
    }

    /// Canonical triple for "apply `self`, then `then`".
    pub fn compose(self, then: Rotation) -> Rotation {
        let top = then.apply(self.apply(Face::Top));
        let front = then.apply(self.apply(Face::Front));
        Self::canonical_for(top, front)
    }

    /// Canonical triple undoing `self`.
    pub fn inverse(self) -> Rotation {
        let top = Face::ALL
            .into_iter()
            .find(|f| self.apply(*f) == Face::Top)
            .unwrap_or(Face::Top);
        let front = Face::ALL
            .into_iter()
            .find(|f| self.apply(*f) == Face::Front)
            .unwrap_or(Face::Front);
        Self::canonical_for(top, front)
    }

    /// First triple in [`Rotation::all`] order that sends TOP to `top` and FRONT to `front`.
    fn canonical_for(top: Face, front: Face) -> Rotation {
        // Every proper cube rotation has a yaw/pitch/roll triple, so the fallback is unreachable
        // for images of a real rotation.
        Rotation::all()
            .find(|r| r.apply(Face::Top) == top && r.apply(Face::Front) == front)
            .unwrap_or(Rotation::IDENTITY)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "yaw={} pitch={} roll={}",
            self.yaw.degrees(),
            self.pitch.degrees(),
            self.roll.degrees()
        )
    }
}
