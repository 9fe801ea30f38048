use geo::{Coordinate, GeoFloat, Rect};
use log::debug;
use slab::Slab;

use super::Noder;
use crate::{
    index::{monotone_chains, EnvelopeIndex, MonotoneChain},
    NodingError, SegmentIntersector, SegmentKey, SegmentString,
};

/// Nodes using monotone chains and an R-tree of their envelopes.
///
/// Each monotone chain is stored in a slab; its slab key is its id.
/// A candidate pair of monotone chains is processed only from the
/// chain with the smaller id, so no pair is tested twice and no chain
/// is tested against itself.
#[derive(Debug, Clone)]
pub struct McIndexNoder<S: SegmentIntersector, D> {
    si: S,
    chains: Vec<SegmentString<S::Scalar, D>>,
    overlap_tolerance: S::Scalar,
    overlap_count: usize,
}

impl<T: GeoFloat, S: SegmentIntersector<Scalar = T>, D> McIndexNoder<S, D> {
    pub fn new(si: S) -> Self {
        McIndexNoder {
            si,
            chains: vec![],
            overlap_tolerance: T::zero(),
            overlap_count: 0,
        }
    }

    /// Expand envelopes by `tolerance` when looking for candidate
    /// pairs.
    pub fn with_overlap_tolerance(mut self, tolerance: T) -> Self {
        self.overlap_tolerance = tolerance;
        self
    }

    /// Get a reference to the intersection strategy.
    pub fn intersector(&self) -> &S {
        &self.si
    }

    pub fn into_intersector(self) -> S {
        self.si
    }

    /// Dissolve into the strategy and the chains of the last noding.
    pub fn into_parts(self) -> (S, Vec<SegmentString<T, D>>) {
        (self.si, self.chains)
    }

    /// The chains of the last noding, with their nodes.
    pub fn segment_strings(&self) -> &[SegmentString<T, D>] {
        &self.chains
    }

    /// Number of monotone chain pairs tested by the last noding.
    pub fn overlap_count(&self) -> usize {
        self.overlap_count
    }

    fn build_monotone_chains(&self) -> Slab<MonotoneChain<T>> {
        let mut storage = Slab::new();
        for (idx, chain) in self.chains.iter().enumerate() {
            for mut mc in monotone_chains(chain.coords(), idx) {
                let entry = storage.vacant_entry();
                mc.set_id(entry.key());
                entry.insert(mc);
            }
        }
        storage
    }

    /// Process every overlapping segment pair of two monotone chains.
    /// Returns whether the strategy is done.
    fn process_overlaps(
        &mut self,
        query: &MonotoneChain<T>,
        test: &MonotoneChain<T>,
    ) -> bool {
        for (i0, i1) in query.overlap_pairs(test, self.overlap_tolerance) {
            self.si.process_intersections(
                &mut self.chains,
                SegmentKey::new(query.chain(), i0),
                SegmentKey::new(test.chain(), i1),
            );
            if self.si.is_done() {
                return true;
            }
        }
        false
    }
}

impl<S: SegmentIntersector, D: Clone> Noder<S::Scalar, D> for McIndexNoder<S, D> {
    fn compute_nodes(
        &mut self,
        chains: Vec<SegmentString<S::Scalar, D>>,
    ) -> Result<(), NodingError> {
        self.chains = chains;
        self.overlap_count = 0;

        let storage = self.build_monotone_chains();
        let index = EnvelopeIndex::bulk_load(storage.iter().map(|(key, mc)| (mc.envelope(), key)));
        debug!(
            "index noder: {n} chains, {m} monotone chains",
            n = self.chains.len(),
            m = storage.len()
        );

        let tol = self.overlap_tolerance;
        'query: for (key, query) in storage.iter() {
            let envelope = expand_by(query.envelope(), tol);
            for &test_key in index.query(envelope) {
                // Each pair is processed once, from its lower id.
                if test_key <= key {
                    continue;
                }
                let test = &storage[test_key];
                self.overlap_count += 1;
                if self.process_overlaps(query, test) {
                    debug!("index noder: done early at monotone chains {key}, {test_key}");
                    break 'query;
                }
            }
            if self.si.is_done() {
                break;
            }
        }
        Ok(())
    }

    fn noded_substrings(&mut self) -> Vec<SegmentString<S::Scalar, D>> {
        crate::noded_substrings(std::mem::take(&mut self.chains))
    }
}

fn expand_by<T: GeoFloat>(rect: Rect<T>, tolerance: T) -> Rect<T> {
    let delta = Coordinate {
        x: tolerance,
        y: tolerance,
    };
    Rect::new(rect.min() - delta, rect.max() + delta)
}
