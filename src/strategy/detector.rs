use geo::Coordinate;

use super::{segment_coords, SegmentIntersector, SegmentKey};
use crate::{LineIntersector, SegmentString};

/// Detects whether any intersection exists, and of which kind.
///
/// Only flags are kept, plus the location and segments of one example
/// intersection. In find-proper mode a proper intersection is preferred
/// as the example and the search stops at the first one; in
/// find-all-types mode it stops once both a proper and a non-proper
/// intersection have been seen. Otherwise it stops at the first
/// intersection of any kind.
#[derive(Debug, Clone)]
pub struct SegmentIntersectionDetector<L: LineIntersector> {
    li: L,
    find_proper: bool,
    find_all_types: bool,
    has_intersection: bool,
    has_proper: bool,
    has_non_proper: bool,
    intersection: Option<Coordinate<L::Scalar>>,
    segments: Option<[Coordinate<L::Scalar>; 4]>,
}

impl<L: LineIntersector> SegmentIntersectionDetector<L> {
    pub fn new(li: L) -> Self {
        SegmentIntersectionDetector {
            li,
            find_proper: false,
            find_all_types: false,
            has_intersection: false,
            has_proper: false,
            has_non_proper: false,
            intersection: None,
            segments: None,
        }
    }

    pub fn with_find_proper(mut self, find_proper: bool) -> Self {
        self.find_proper = find_proper;
        self
    }

    pub fn with_find_all_types(mut self, find_all_types: bool) -> Self {
        self.find_all_types = find_all_types;
        self
    }

    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    pub fn has_non_proper_intersection(&self) -> bool {
        self.has_non_proper
    }

    /// Location of the example intersection.
    pub fn intersection(&self) -> Option<Coordinate<L::Scalar>> {
        self.intersection
    }

    /// Endpoints of the two segments of the example intersection.
    pub fn intersection_segments(&self) -> Option<[Coordinate<L::Scalar>; 4]> {
        self.segments
    }
}

impl<L: LineIntersector> SegmentIntersector for SegmentIntersectionDetector<L> {
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

        let result = self.li.compute_intersection(
            chains[e0.chain].segment(e0.segment),
            chains[e1.chain].segment(e1.segment),
        );
        if !result.has_intersection() {
            return;
        }

        self.has_intersection = true;
        let is_proper = result.is_proper();
        if is_proper {
            self.has_proper = true;
        } else {
            self.has_non_proper = true;
        }

        // Keep the first example, replacing it only with the kind
        // being searched for.
        let save = !self.find_proper || is_proper;
        if self.intersection.is_none() || save {
            self.intersection = Some(result.intersection(0));
            self.segments = Some(segment_coords(chains, e0, e1));
        }
    }

    fn is_done(&self) -> bool {
        if self.find_all_types {
            self.has_proper && self.has_non_proper
        } else if self.find_proper {
            self.has_proper
        } else {
            self.has_intersection
        }
    }
}
