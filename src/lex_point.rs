use geo::{Coordinate, GeoFloat};
use std::cmp::Ordering;

/// A [`Coordinate`] ordered by `x`, then by `y`.
///
/// The intersector uses it to put each pair of segments into one
/// canonical order before computing, so the computed points do not
/// depend on which segment came first.
///
/// Construction rejects non-finite components, which keeps the total
/// order below well defined for float scalars.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LexPoint<T: GeoFloat>(Coordinate<T>);

impl<T: GeoFloat> LexPoint<T> {
    /// Get the wrapped coordinate.
    #[inline]
    pub fn coord(&self) -> Coordinate<T> {
        self.0
    }
}

impl<T: GeoFloat> PartialOrd for LexPoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Components are finite, so `partial_cmp` never fails.
fn cmp_finite<T: GeoFloat>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl<T: GeoFloat> Ord for LexPoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_finite(self.0.x, other.0.x).then_with(|| cmp_finite(self.0.y, other.0.y))
    }
}

impl<T: GeoFloat> Eq for LexPoint<T> {}

/// # Panics
///
/// If either component is not finite.
impl<T: GeoFloat> From<Coordinate<T>> for LexPoint<T> {
    fn from(pt: Coordinate<T>) -> Self {
        assert!(pt.x.is_finite(), "lex point requires a finite x-coordinate");
        assert!(pt.y.is_finite(), "lex point requires a finite y-coordinate");
        LexPoint(pt)
    }
}
