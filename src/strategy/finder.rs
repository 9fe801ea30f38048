use geo::Coordinate;
use log::debug;

use super::{is_adjacent_segments, segment_coords, SegmentIntersector, SegmentKey};
use crate::{LineIntersector, SegmentString};

/// Finds intersections that are interior to at least one segment.
///
/// Used to check whether a set of segment strings is correctly noded.
/// By default the search stops at the first intersection found; in
/// find-all mode every one is counted and (optionally) recorded.
///
/// When the input is known to be at most one round of noding away
/// from correct, leftover interior intersections can only occur on the
/// first or last segment of a chain, and the search can be restricted
/// to those with [`with_end_segments_only`](Self::with_end_segments_only).
#[derive(Debug, Clone)]
pub struct InteriorIntersectionFinder<L: LineIntersector> {
    li: L,
    find_all: bool,
    end_segments_only: bool,
    keep_intersections: bool,
    check_interior_vertices: bool,
    interior_intersection: Option<Coordinate<L::Scalar>>,
    segments: Option<[Coordinate<L::Scalar>; 4]>,
    intersections: Vec<Coordinate<L::Scalar>>,
    count: usize,
}

impl<L: LineIntersector> InteriorIntersectionFinder<L> {
    /// Stop at the first interior intersection and record it.
    pub fn new(li: L) -> Self {
        InteriorIntersectionFinder {
            li,
            find_all: false,
            end_segments_only: false,
            keep_intersections: true,
            check_interior_vertices: false,
            interior_intersection: None,
            segments: None,
            intersections: Vec::new(),
            count: 0,
        }
    }

    /// Find and record every interior intersection.
    pub fn all_intersections(li: L) -> Self {
        Self::new(li).with_find_all(true)
    }

    /// Count every interior intersection without recording points.
    pub fn counter(li: L) -> Self {
        Self::new(li)
            .with_find_all(true)
            .with_keep_intersections(false)
    }

    pub fn with_find_all(mut self, find_all: bool) -> Self {
        self.find_all = find_all;
        self
    }

    pub fn with_end_segments_only(mut self, end_segments_only: bool) -> Self {
        self.end_segments_only = end_segments_only;
        self
    }

    pub fn with_keep_intersections(mut self, keep_intersections: bool) -> Self {
        self.keep_intersections = keep_intersections;
        self
    }

    /// Also report coincident vertices that are not both chain
    /// endpoints (such as the end of one chain touching an interior
    /// vertex of another).
    pub fn with_interior_vertex_check(mut self, check: bool) -> Self {
        self.check_interior_vertices = check;
        self
    }

    pub fn has_intersection(&self) -> bool {
        self.interior_intersection.is_some()
    }

    /// Get the last intersection found.
    pub fn intersection(&self) -> Option<Coordinate<L::Scalar>> {
        self.interior_intersection
    }

    /// Endpoints of the two segments of the last intersection found.
    pub fn intersection_segments(&self) -> Option<[Coordinate<L::Scalar>; 4]> {
        self.segments
    }

    /// Recorded intersections (empty unless keeping intersections).
    pub fn intersections(&self) -> &[Coordinate<L::Scalar>] {
        &self.intersections
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn is_end_segment_pair<D>(
        chains: &[SegmentString<L::Scalar, D>],
        e0: SegmentKey,
        e1: SegmentKey,
    ) -> bool {
        chains[e0.chain].is_end_segment(e0.segment) || chains[e1.chain].is_end_segment(e1.segment)
    }

    /// Whether a vertex of `e0` coincides with a vertex of `e1` where
    /// the two are not both chain endpoints.
    fn is_interior_vertex_intersection<D>(
        chains: &[SegmentString<L::Scalar, D>],
        e0: SegmentKey,
        e1: SegmentKey,
    ) -> bool {
        if e0.chain == e1.chain && is_adjacent_segments(&chains[e0.chain], e0.segment, e1.segment) {
            return false;
        }

        let ends = |key: SegmentKey| {
            let chain = &chains[key.chain];
            [key.segment == 0, key.segment + 2 == chain.count()]
        };
        let [p00, p01, p10, p11] = segment_coords(chains, e0, e1);
        let [end00, end01] = ends(e0);
        let [end10, end11] = ends(e1);

        [
            (p00, p10, end00, end10),
            (p00, p11, end00, end11),
            (p01, p10, end01, end10),
            (p01, p11, end01, end11),
        ]
        .iter()
        .any(|&(a, b, end_a, end_b)| !(end_a && end_b) && a == b)
    }
}

impl<L: LineIntersector> SegmentIntersector for InteriorIntersectionFinder<L> {
    type Scalar = L::Scalar;

    fn process_intersections<D>(
        &mut self,
        chains: &mut [SegmentString<Self::Scalar, D>],
        e0: SegmentKey,
        e1: SegmentKey,
    ) {
        if e0 == e1 {
            return;
        }
        if self.end_segments_only && !Self::is_end_segment_pair(chains, e0, e1) {
            return;
        }

        let result = self.li.compute_intersection(
            chains[e0.chain].segment(e0.segment),
            chains[e1.chain].segment(e1.segment),
        );
        if !result.has_intersection() {
            return;
        }

        let is_interior = result.is_interior_intersection();
        let is_vertex =
            self.check_interior_vertices && Self::is_interior_vertex_intersection(chains, e0, e1);
        if !(is_interior || is_vertex) {
            return;
        }

        let pt = result.intersection(0);
        debug!("finder: interior intersection at {pt:?} between {e0:?} and {e1:?}");
        self.interior_intersection = Some(pt);
        self.segments = Some(segment_coords(chains, e0, e1));
        if self.keep_intersections {
            self.intersections.push(pt);
        }
        self.count += 1;
    }

    fn is_done(&self) -> bool {
        !self.find_all && self.interior_intersection.is_some()
    }
}
