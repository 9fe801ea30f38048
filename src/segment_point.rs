//! Robust ordering of points along a segment.
//!
//! Points computed as intersections on the same segment are ordered
//! using only the signs of their coordinate differences, selected by
//! the segment's [`Octant`]. No projected distance is computed, so
//! the ordering cannot be disturbed by rounding for nearly collinear
//! or nearly parallel input.
use std::cmp::Ordering;

use geo::{Coordinate, GeoFloat};

use crate::Octant;

/// Order two points lying on (or very near) a segment with the given
/// octant, by their position along the segment direction.
pub fn compare<T: GeoFloat>(octant: Octant, p0: Coordinate<T>, p1: Coordinate<T>) -> Ordering {
    if p0 == p1 {
        return Ordering::Equal;
    }

    let x_sign = relative_sign(p0.x, p1.x);
    let y_sign = relative_sign(p0.y, p1.y);

    use Octant::*;
    match octant {
        Ene => compare_value(x_sign, y_sign),
        Nne => compare_value(y_sign, x_sign),
        Nnw => compare_value(y_sign, x_sign.reverse()),
        Wnw => compare_value(x_sign.reverse(), y_sign),
        Wsw => compare_value(x_sign.reverse(), y_sign.reverse()),
        Ssw => compare_value(y_sign.reverse(), x_sign.reverse()),
        Sse => compare_value(y_sign.reverse(), x_sign),
        Ese => compare_value(x_sign, y_sign.reverse()),
    }
}

/// Sign of `x0 - x1`, as an ordering.
#[inline]
pub fn relative_sign<T: GeoFloat>(x0: T, x1: T) -> Ordering {
    if x0 < x1 {
        Ordering::Less
    } else if x0 > x1 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// The first decisive sign of the two.
#[inline]
pub fn compare_value(primary: Ordering, secondary: Ordering) -> Ordering {
    primary.then(secondary)
}
