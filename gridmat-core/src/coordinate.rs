//! Packed grid coordinates
//!
//! A [`Coordinate`] stores an `(x, y)` pair in a single 32-bit word so that
//! iterating over the cells of a grid does not need to allocate pairs. Both
//! halves are 16-bit signed values: x in the high half, y in the low half.

/// A packed `(x, y)` grid coordinate
///
/// Only values in `[-32768, 32767]` survive the round trip; larger values are
/// truncated to their low 16 bits.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate(u32);

impl Coordinate {
    /// Number of non-negative positions per axis that survive packing
    pub const AXIS_LIMIT: usize = 1 << 15;

    /// Pack `x` and `y` into a coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        let hi = (x as i16 as u16) as u32;
        let lo = (y as i16 as u16) as u32;
        Self((hi << 16) | lo)
    }

    /// Create a coordinate from its packed representation
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// The packed representation
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// The x part, sign extended
    pub const fn x(self) -> i32 {
        (self.0 >> 16) as u16 as i16 as i32
    }

    /// The y part, sign extended
    pub const fn y(self) -> i32 {
        self.0 as u16 as i16 as i32
    }

    /// Decompose into `(x, y)`
    pub const fn into_pair(self) -> (i32, i32) {
        (self.x(), self.y())
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(pos: Coordinate) -> Self {
        pos.into_pair()
    }
}

impl core::fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Coordinate({}, {})", self.x(), self.y())
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
