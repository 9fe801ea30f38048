use geo::{Coordinate, GeoFloat};
use itertools::Itertools;
use log::trace;
use smallvec::SmallVec;

use super::{SegmentNode, SegmentString};

/// The nodes of one segment string, kept sorted by position.
#[derive(Debug, Clone)]
pub struct SegmentNodeList<T: GeoFloat> {
    nodes: Vec<SegmentNode<T>>,
}

impl<T: GeoFloat> Default for SegmentNodeList<T> {
    fn default() -> Self {
        SegmentNodeList { nodes: Vec::new() }
    }
}

impl<T: GeoFloat> SegmentNodeList<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SegmentNode<T>> {
        self.nodes.iter()
    }

    /// Node coordinates in order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate<T>> + '_ {
        self.nodes.iter().map(|n| n.coord())
    }

    /// Number of nodes strictly inside a segment.
    pub fn interior_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_interior()).count()
    }

    /// Insert a node unless an equal one exists. Returns whether a
    /// node was inserted.
    pub(crate) fn add(
        &mut self,
        coords: &[Coordinate<T>],
        coord: Coordinate<T>,
        segment_index: usize,
    ) -> bool {
        let node = SegmentNode::new(coords, coord, segment_index);
        match self.nodes.binary_search_by(|n| n.cmp_position(&node)) {
            Ok(pos) if self.nodes[pos].coord() == coord => false,
            Ok(pos) | Err(pos) => {
                trace!("node: {coord:?} at segment {segment_index}");
                self.nodes.insert(pos, node);
                true
            }
        }
    }

    /// Ensure the first and last vertices are nodes.
    pub(crate) fn add_endpoints(&mut self, coords: &[Coordinate<T>]) {
        let last = coords.len() - 1;
        self.add(coords, coords[0], 0);
        self.add(coords, coords[last], last);
    }

    /// Node the base vertex of every `a-b-a` collapse, whether the
    /// collapse is formed by input vertices or by two equal nodes
    /// with a single vertex between them.
    fn add_collapsed_nodes(&mut self, coords: &[Coordinate<T>]) {
        let mut collapsed = SmallVec::<[usize; 4]>::new();

        for (n0, n1) in self.nodes.iter().tuple_windows() {
            if n0.coord() != n1.coord() {
                continue;
            }
            let between = (n1.segment_index() - n0.segment_index())
                .saturating_sub(if n1.is_interior() { 0 } else { 1 });
            if between == 1 {
                collapsed.push(n0.segment_index() + 1);
            }
        }

        for (i, w) in coords.windows(3).enumerate() {
            if w[0] == w[2] {
                collapsed.push(i + 1);
            }
        }

        for idx in collapsed {
            self.add(coords, coords[idx], idx);
        }
    }

    /// Points of the sub-chain between two consecutive nodes.
    fn split_points(
        coords: &[Coordinate<T>],
        n0: &SegmentNode<T>,
        n1: &SegmentNode<T>,
    ) -> Vec<Coordinate<T>> {
        if n0.segment_index() == n1.segment_index() {
            return vec![n0.coord(), n1.coord()];
        }

        let mut pts = Vec::with_capacity(n1.segment_index() - n0.segment_index() + 2);
        pts.push(n0.coord());
        pts.extend_from_slice(&coords[n0.segment_index() + 1..=n1.segment_index()]);
        // The closing node repeats the last copied vertex unless it
        // lies inside its segment.
        if n1.is_interior() {
            pts.push(n1.coord());
        }
        pts
    }

    /// Split the parent chain at every node.
    pub(crate) fn split_chains<D: Clone>(
        &mut self,
        coords: &[Coordinate<T>],
        data: &D,
    ) -> Vec<SegmentString<T, D>> {
        self.add_endpoints(coords);
        self.add_collapsed_nodes(coords);

        let chains: Vec<_> = self
            .nodes
            .iter()
            .tuple_windows()
            .map(|(n0, n1)| SegmentString::new(Self::split_points(coords, n0, n1), data.clone()))
            .collect();

        debug_assert!(
            chains.first().map(|c| c.coord(0)) == coords.first().copied(),
            "bad split: first point differs from the parent"
        );
        debug_assert!(
            chains.last().map(|c| c.coord(c.count() - 1)) == coords.last().copied(),
            "bad split: last point differs from the parent"
        );
        chains
    }

    /// The parent point sequence with every node inserted.
    pub(crate) fn split_coordinates(&mut self, coords: &[Coordinate<T>]) -> Vec<Coordinate<T>> {
        self.add_endpoints(coords);

        let mut out: Vec<Coordinate<T>> = Vec::with_capacity(coords.len() + self.nodes.len());
        for (n0, n1) in self.nodes.iter().tuple_windows() {
            for pt in Self::split_points(coords, n0, n1) {
                if out.last() != Some(&pt) {
                    out.push(pt);
                }
            }
        }
        out
    }
}

impl<'a, T: GeoFloat> IntoIterator for &'a SegmentNodeList<T> {
    type Item = &'a SegmentNode<T>;
    type IntoIter = std::slice::Iter<'a, SegmentNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
