use geo::GeoFloat;
use log::debug;

use super::{McIndexNoder, Noder};
use crate::{
    IntersectionAdder, LineIntersector, NodingError, PrecisionModel, RobustLineIntersector,
    SegmentString,
};

/// Nodes repeatedly until no interior intersections remain.
///
/// Rounding computed intersection points can introduce new
/// intersections, so the noded substrings of each round are fed into
/// another round of index noding. If a round finds more interior
/// intersections than the round before it, the noding is failing to
/// converge and [`NodingError::NonConvergence`] is returned.
#[derive(Debug, Clone)]
pub struct IteratedNoder<L: LineIntersector, D> {
    li: L,
    max_iterations: Option<usize>,
    iterations: usize,
    chains: Vec<SegmentString<L::Scalar, D>>,
}

impl<T: GeoFloat, D> IteratedNoder<RobustLineIntersector<T>, D> {
    pub fn new(precision: PrecisionModel<T>) -> Self {
        Self::with_intersector(RobustLineIntersector::with_precision(precision))
    }
}

impl<L: LineIntersector + Clone, D> IteratedNoder<L, D> {
    pub fn with_intersector(li: L) -> Self {
        IteratedNoder {
            li,
            max_iterations: None,
            iterations: 0,
            chains: vec![],
        }
    }

    /// Fail once `max` rounds have run without converging.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Rounds used by the last noding.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run one round of index noding, returning the noded substrings
    /// and the number of interior intersections found.
    fn node_once(
        &self,
        chains: Vec<SegmentString<L::Scalar, D>>,
    ) -> Result<(Vec<SegmentString<L::Scalar, D>>, usize), NodingError>
    where
        D: Clone,
    {
        let mut noder = McIndexNoder::new(IntersectionAdder::new(self.li.clone()));
        noder.compute_nodes(chains)?;
        let count = noder.intersector().interior_intersection_count();
        Ok((noder.noded_substrings(), count))
    }
}

impl<L: LineIntersector + Clone, D: Clone> Noder<L::Scalar, D> for IteratedNoder<L, D> {
    fn compute_nodes(
        &mut self,
        chains: Vec<SegmentString<L::Scalar, D>>,
    ) -> Result<(), NodingError> {
        self.iterations = 0;
        self.chains.clear();

        let mut chains = chains;
        let mut last_count = None;
        loop {
            let (noded, count) = self.node_once(chains)?;
            self.iterations += 1;
            debug!(
                "iterated noder: round {round} found {count} interior intersections",
                round = self.iterations
            );
            chains = noded;

            if count == 0 {
                break;
            }
            let diverging = last_count.map_or(false, |last| count > last);
            let exhausted = self.max_iterations.map_or(false, |max| self.iterations >= max);
            if diverging || exhausted {
                return Err(NodingError::NonConvergence {
                    iterations: self.iterations,
                    interior_intersections: count,
                });
            }
            last_count = Some(count);
        }

        self.chains = chains;
        Ok(())
    }

    /// The chains are already split by the last round; this returns
    /// them as they are.
    fn noded_substrings(&mut self) -> Vec<SegmentString<L::Scalar, D>> {
        std::mem::take(&mut self.chains)
    }
}
