use itertools::iproduct;
use log::debug;

use super::Noder;
use crate::{NodingError, SegmentIntersector, SegmentKey, SegmentString};

/// Nodes by testing every segment against every other segment.
///
/// Each ordered pair of chains (a chain with itself included) is
/// scanned, so the work is quadratic in the total number of segments.
/// Useful as a baseline and for small inputs.
#[derive(Debug, Clone)]
pub struct SimpleNoder<S: SegmentIntersector, D> {
    si: S,
    chains: Vec<SegmentString<S::Scalar, D>>,
}

impl<S: SegmentIntersector, D> SimpleNoder<S, D> {
    pub fn new(si: S) -> Self {
        SimpleNoder { si, chains: vec![] }
    }

    /// Get a reference to the intersection strategy.
    pub fn intersector(&self) -> &S {
        &self.si
    }

    pub fn into_intersector(self) -> S {
        self.si
    }

    /// Dissolve into the strategy and the chains of the last noding.
    pub fn into_parts(self) -> (S, Vec<SegmentString<S::Scalar, D>>) {
        (self.si, self.chains)
    }

    /// The chains of the last noding, with their nodes.
    pub fn segment_strings(&self) -> &[SegmentString<S::Scalar, D>] {
        &self.chains
    }

    fn compute_intersects(&mut self, c0: usize, c1: usize) -> bool {
        let n0 = self.chains[c0].segment_count();
        let n1 = self.chains[c1].segment_count();
        for (i0, i1) in iproduct!(0..n0, 0..n1) {
            self.si.process_intersections(
                &mut self.chains,
                SegmentKey::new(c0, i0),
                SegmentKey::new(c1, i1),
            );
            if self.si.is_done() {
                return true;
            }
        }
        false
    }
}

impl<S: SegmentIntersector, D: Clone> Noder<S::Scalar, D> for SimpleNoder<S, D> {
    fn compute_nodes(
        &mut self,
        chains: Vec<SegmentString<S::Scalar, D>>,
    ) -> Result<(), NodingError> {
        self.chains = chains;
        let n = self.chains.len();
        debug!("simple noder: {n} chains");

        for (c0, c1) in iproduct!(0..n, 0..n) {
            if self.compute_intersects(c0, c1) {
                debug!("simple noder: done early at chains {c0}, {c1}");
                break;
            }
        }
        Ok(())
    }

    fn noded_substrings(&mut self) -> Vec<SegmentString<S::Scalar, D>> {
        crate::noded_substrings(std::mem::take(&mut self.chains))
    }
}

#[cfg(test)]
mod tests {
    use geo::Coordinate;

    use super::*;
    use crate::{IntersectionAdder, InteriorIntersectionFinder, RobustLineIntersector};

    fn ss(coords: &[(f64, f64)]) -> SegmentString<f64, u8> {
        SegmentString::new(coords.iter().map(|&c| c.into()).collect(), 0)
    }

    #[test]
    fn simple_crossing() {
        let mut noder = SimpleNoder::new(IntersectionAdder::new(RobustLineIntersector::new()));
        noder
            .compute_nodes(vec![ss(&[(0., 0.), (10., 10.)]), ss(&[(0., 10.), (10., 0.)])])
            .unwrap();
        for chain in noder.segment_strings() {
            let nodes: Vec<_> = chain.nodes().coords().collect();
            assert_eq!(nodes, vec![Coordinate { x: 5., y: 5. }]);
        }

        let pieces = noder.noded_substrings();
        assert_eq!(pieces.len(), 4);
        assert!(pieces.iter().all(|p| p.count() == 2));
        assert!(noder.segment_strings().is_empty());
    }

    #[test]
    fn self_intersection() {
        // A bow tie crossing itself at (5 5).
        let chain = ss(&[(0., 0.), (10., 10.), (10., 0.), (0., 10.)]);
        let mut noder = SimpleNoder::new(IntersectionAdder::new(RobustLineIntersector::new()));
        let pieces = noder.node(vec![chain]).unwrap();
        assert_eq!(pieces.len(), 3);
        let mid = Coordinate { x: 5., y: 5. };
        assert_eq!(pieces[0].coords(), &[Coordinate { x: 0., y: 0. }, mid]);
        assert_eq!(pieces[1].coord(0), mid);
        assert_eq!(pieces[1].coord(3), mid);
    }

    #[test]
    fn stops_when_done() {
        let chains = vec![
            ss(&[(0., 0.), (10., 10.)]),
            ss(&[(0., 10.), (10., 0.)]),
            ss(&[(0., 2.), (10., 2.)]),
        ];
        let mut noder = SimpleNoder::new(InteriorIntersectionFinder::new(RobustLineIntersector::new()));
        noder.compute_nodes(chains).unwrap();
        let finder = noder.into_intersector();
        assert_eq!(finder.count(), 1);
    }
}
