use geo::{Coordinate, GeoFloat};

use crate::NodingError;

/// One of the eight discretized directions of a segment.
///
/// Octants are numbered counter-clockwise starting from the
/// east-north-east direction. The variant names read as compass points
/// of the dominant direction: `Ene` is mostly east with a non-negative
/// north component, `Nne` mostly north, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Octant {
    Ene = 0,
    Nne = 1,
    Nnw = 2,
    Wnw = 3,
    Wsw = 4,
    Ssw = 5,
    Sse = 6,
    Ese = 7,
}

impl Octant {
    /// Octant of the displacement vector `(dx, dy)`.
    ///
    /// Vectors exactly on a diagonal belong to the lower-numbered
    /// of the two candidate octants.
    pub fn new<T: GeoFloat>(dx: T, dy: T) -> Result<Self, NodingError> {
        if dx == T::zero() && dy == T::zero() {
            return Err(NodingError::InvalidSegment);
        }

        let adx = dx.abs();
        let ady = dy.abs();
        let octant = if dx >= T::zero() {
            if dy >= T::zero() {
                if adx >= ady {
                    Octant::Ene
                } else {
                    Octant::Nne
                }
            } else if adx > ady {
                Octant::Ese
            } else {
                Octant::Sse
            }
        } else if dy >= T::zero() {
            if adx > ady {
                Octant::Wnw
            } else {
                Octant::Nnw
            }
        } else if adx >= ady {
            Octant::Wsw
        } else {
            Octant::Ssw
        };
        Ok(octant)
    }

    /// Octant of the segment directed from `p0` to `p1`.
    #[inline]
    pub fn of_segment<T: GeoFloat>(p0: Coordinate<T>, p1: Coordinate<T>) -> Result<Self, NodingError> {
        Octant::new(p1.x - p0.x, p1.y - p0.y)
    }

    /// Numeric value in `0..8`.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}
