use log::trace;

use super::{is_adjacent_segments, SegmentIntersector, SegmentKey};
use crate::{intersector::SegmentIntersection, LineIntersector, SegmentString};

/// Records every non-trivial intersection as a node on both segment
/// strings involved.
///
/// A trivial intersection is the single shared vertex of two adjacent
/// segments of the same chain (including the closing pair of a closed
/// chain); those always touch and are not recorded. This strategy is
/// exhaustive: [`is_done`](SegmentIntersector::is_done) is never true.
#[derive(Debug, Clone)]
pub struct IntersectionAdder<L: LineIntersector> {
    li: L,
    has_intersection: bool,
    has_proper: bool,
    has_interior: bool,
    test_count: usize,
    intersection_count: usize,
    interior_count: usize,
    proper_count: usize,
}

impl<L: LineIntersector> IntersectionAdder<L> {
    pub fn new(li: L) -> Self {
        IntersectionAdder {
            li,
            has_intersection: false,
            has_proper: false,
            has_interior: false,
            test_count: 0,
            intersection_count: 0,
            interior_count: 0,
            proper_count: 0,
        }
    }

    /// Get a reference to the line intersector.
    pub fn line_intersector(&self) -> &L {
        &self.li
    }

    /// Whether any non-trivial intersection was recorded.
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    pub fn has_interior_intersection(&self) -> bool {
        self.has_interior
    }

    /// Number of segment pairs tested.
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    pub fn intersection_count(&self) -> usize {
        self.intersection_count
    }

    pub fn interior_intersection_count(&self) -> usize {
        self.interior_count
    }

    pub fn proper_intersection_count(&self) -> usize {
        self.proper_count
    }

    fn is_trivial_intersection<D>(
        chains: &[SegmentString<L::Scalar, D>],
        e0: SegmentKey,
        e1: SegmentKey,
        result: &SegmentIntersection<L::Scalar>,
    ) -> bool {
        e0.chain == e1.chain
            && result.intersection_count() == 1
            && is_adjacent_segments(&chains[e0.chain], e0.segment, e1.segment)
    }
}

impl<L: LineIntersector> SegmentIntersector for IntersectionAdder<L> {
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
        self.test_count += 1;

        let result = self.li.compute_intersection(
            chains[e0.chain].segment(e0.segment),
            chains[e1.chain].segment(e1.segment),
        );
        if !result.has_intersection() || Self::is_trivial_intersection(chains, e0, e1, &result) {
            return;
        }

        self.has_intersection = true;
        self.intersection_count += 1;
        if result.is_interior_intersection() {
            self.has_interior = true;
            self.interior_count += 1;
        }
        if result.is_proper() {
            self.has_proper = true;
            self.proper_count += 1;
        }
        trace!("adder: {e0:?} x {e1:?} at {pts:?}", pts = result.points());

        chains[e0.chain].add_intersections(&result, e0.segment);
        chains[e1.chain].add_intersections(&result, e1.segment);
    }
}

#[cfg(test)]
mod tests {
    use geo::Coordinate;

    use super::*;
    use crate::RobustLineIntersector;

    fn ss(coords: &[(f64, f64)]) -> SegmentString<f64, ()> {
        SegmentString::new(coords.iter().map(|&c| c.into()).collect(), ())
    }

    fn adder() -> IntersectionAdder<RobustLineIntersector<f64>> {
        IntersectionAdder::new(RobustLineIntersector::new())
    }

    #[test]
    fn records_crossing_on_both_chains() {
        let mut chains = vec![ss(&[(0., 0.), (10., 10.)]), ss(&[(0., 10.), (10., 0.)])];
        let mut si = adder();
        si.process_intersections(&mut chains, SegmentKey::new(0, 0), SegmentKey::new(1, 0));

        assert!(si.has_intersection());
        assert!(si.has_proper_intersection());
        assert!(si.has_interior_intersection());
        assert_eq!(si.test_count(), 1);
        assert_eq!(si.proper_intersection_count(), 1);
        for chain in &chains {
            let nodes: Vec<_> = chain.nodes().coords().collect();
            assert_eq!(nodes, vec![Coordinate { x: 5., y: 5. }]);
        }
    }

    #[test]
    fn skips_same_segment() {
        let mut chains = vec![ss(&[(0., 0.), (10., 10.)])];
        let mut si = adder();
        si.process_intersections(&mut chains, SegmentKey::new(0, 0), SegmentKey::new(0, 0));
        assert_eq!(si.test_count(), 0);
        assert!(chains[0].nodes().is_empty());
    }

    #[test]
    fn adjacent_segments_are_trivial() {
        let mut chains = vec![ss(&[(0., 0.), (5., 0.), (5., 5.), (0., 5.), (0., 0.)])];
        let mut si = adder();
        si.process_intersections(&mut chains, SegmentKey::new(0, 0), SegmentKey::new(0, 1));
        // Closing pair of the ring.
        si.process_intersections(&mut chains, SegmentKey::new(0, 3), SegmentKey::new(0, 0));
        assert_eq!(si.test_count(), 2);
        assert!(!si.has_intersection());
        assert!(chains[0].nodes().is_empty());
    }

    #[test]
    fn shared_endpoint_of_distinct_chains_adds_no_extra_node() {
        let mut chains = vec![ss(&[(0., 0.), (1., 1.)]), ss(&[(1., 1.), (2., 0.)])];
        let mut si = adder();
        si.process_intersections(&mut chains, SegmentKey::new(0, 0), SegmentKey::new(1, 0));
        assert!(si.has_intersection());
        assert!(!si.has_interior_intersection());
        for chain in chains.iter_mut() {
            chain.add_endpoints();
            assert_eq!(chain.nodes().len(), 2);
        }
    }

    #[test]
    fn collinear_fold_back_is_not_trivial() {
        // Segment 1 doubles back over segment 0.
        let mut chains = vec![ss(&[(0., 0.), (10., 0.), (4., 0.)])];
        let mut si = adder();
        si.process_intersections(&mut chains, SegmentKey::new(0, 0), SegmentKey::new(0, 1));
        assert!(si.has_interior_intersection());
        assert!(chains[0]
            .nodes()
            .coords()
            .any(|c| c == Coordinate { x: 4., y: 0. }));
    }
}
