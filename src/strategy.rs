//! Pluggable handling of candidate segment pairs.
//!
//! A noder enumerates candidate pairs of segments and hands each pair
//! to a [`SegmentIntersector`]. The strategy decides what to do with
//! the pair: record nodes ([`IntersectionAdder`]), look for a leftover
//! bad intersection ([`InteriorIntersectionFinder`]) or classify the
//! intersections present ([`SegmentIntersectionDetector`]).
//!
//! Strategies address segments by [`SegmentKey`] into the slice of
//! segment strings being noded, and only borrow that slice for the
//! duration of one call.
use geo::{Coordinate, GeoFloat};

use crate::SegmentString;

mod adder;
pub use adder::IntersectionAdder;

mod finder;
pub use finder::InteriorIntersectionFinder;

mod detector;
pub use detector::SegmentIntersectionDetector;

/// Identifies segment `segment` of segment string `chain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey {
    pub chain: usize,
    pub segment: usize,
}

impl SegmentKey {
    #[inline]
    pub fn new(chain: usize, segment: usize) -> Self {
        SegmentKey { chain, segment }
    }
}

/// Processes candidate segment pairs found by a noder.
pub trait SegmentIntersector {
    type Scalar: GeoFloat;

    /// Handle the pair `e0`, `e1`. Pairs naming the same segment twice
    /// are ignored.
    fn process_intersections<D>(
        &mut self,
        chains: &mut [SegmentString<Self::Scalar, D>],
        e0: SegmentKey,
        e1: SegmentKey,
    );

    /// Whether the strategy has seen enough; noders stop enumerating
    /// pairs once this returns `true`.
    fn is_done(&self) -> bool {
        false
    }
}

/// Whether two segments of the same chain are neighbours, including
/// the wrap-around pair of a closed chain.
pub(crate) fn is_adjacent_segments<T: GeoFloat, D>(
    chain: &SegmentString<T, D>,
    i0: usize,
    i1: usize,
) -> bool {
    let (lo, hi) = if i0 < i1 { (i0, i1) } else { (i1, i0) };
    if hi - lo == 1 {
        return true;
    }
    chain.is_closed() && lo == 0 && hi + 1 == chain.segment_count()
}

/// The four endpoints of a segment pair.
pub(crate) fn segment_coords<T: GeoFloat, D>(
    chains: &[SegmentString<T, D>],
    e0: SegmentKey,
    e1: SegmentKey,
) -> [Coordinate<T>; 4] {
    let s0 = chains[e0.chain].segment(e0.segment);
    let s1 = chains[e1.chain].segment(e1.segment);
    [s0.start, s0.end, s1.start, s1.end]
}
