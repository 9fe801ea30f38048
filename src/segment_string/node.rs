use std::cmp::Ordering;

use geo::{Coordinate, GeoFloat};

use crate::{intersector::edge_distance, segment_point, Octant};

/// An intersection recorded on a segment string.
///
/// Nodes order by segment index and then by position along the
/// segment (see [`SegmentNode::cmp_position`]). Two nodes with equal
/// segment index and equal coordinate are the same node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentNode<T: GeoFloat> {
    coord: Coordinate<T>,
    segment_index: usize,
    octant: Option<Octant>,
    distance: T,
    is_interior: bool,
}

impl<T: GeoFloat> SegmentNode<T> {
    /// Create a node at `coord` on segment `segment_index` of the
    /// point sequence `coords`.
    pub(crate) fn new(coords: &[Coordinate<T>], coord: Coordinate<T>, segment_index: usize) -> Self {
        let start = coords[segment_index];
        let (octant, distance) = match coords.get(segment_index + 1) {
            Some(&end) => (
                Octant::of_segment(start, end).ok(),
                edge_distance(coord, start, end),
            ),
            None => (None, T::zero()),
        };
        SegmentNode {
            coord,
            segment_index,
            octant,
            distance,
            is_interior: coord != start,
        }
    }

    /// Get the node's coordinate.
    #[inline]
    pub fn coord(&self) -> Coordinate<T> {
        self.coord
    }

    /// Get the node's segment index.
    #[inline]
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// Octant of the segment the node lies on; `None` when the segment
    /// has zero length or the node sits on the final vertex.
    #[inline]
    pub fn octant(&self) -> Option<Octant> {
        self.octant
    }

    /// Get the node's edge distance along its segment.
    #[inline]
    pub fn distance(&self) -> T {
        self.distance
    }

    /// Whether the node does not coincide with the start vertex of its
    /// segment.
    #[inline]
    pub fn is_interior(&self) -> bool {
        self.is_interior
    }

    /// Order by segment index, then edge distance; exact distance ties
    /// are settled by the octant-based point comparator.
    pub fn cmp_position(&self, other: &Self) -> Ordering {
        self.segment_index
            .cmp(&other.segment_index)
            .then_with(|| {
                self.distance
                    .partial_cmp(&other.distance)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| match self.octant {
                Some(octant) => segment_point::compare(octant, self.coord, other.coord),
                None => Ordering::Equal,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate<f64> {
        Coordinate { x, y }
    }

    #[test]
    fn interior_flag() {
        let coords = [c(0., 0.), c(10., 0.), c(10., 10.)];
        let at_vertex = SegmentNode::new(&coords, c(10., 0.), 1);
        assert!(!at_vertex.is_interior());
        assert_eq!(at_vertex.distance(), 0.);
        assert_eq!(at_vertex.octant(), Some(Octant::Nne));

        let inside = SegmentNode::new(&coords, c(4., 0.), 0);
        assert!(inside.is_interior());
        assert_eq!(inside.distance(), 4.);

        let last = SegmentNode::new(&coords, c(10., 10.), 2);
        assert_eq!(last.octant(), None);
        assert!(!last.is_interior());
    }

    #[test]
    fn ordering() {
        let coords = [c(10., 0.), c(0., 0.), c(0., 5.)];
        let a = SegmentNode::new(&coords, c(8., 0.), 0);
        let b = SegmentNode::new(&coords, c(3., 0.), 0);
        let d = SegmentNode::new(&coords, c(0., 1.), 1);
        assert_eq!(a.cmp_position(&b), Ordering::Less);
        assert_eq!(b.cmp_position(&d), Ordering::Less);
        assert_eq!(a.cmp_position(&a), Ordering::Equal);
    }

    #[test]
    fn comparator_breaks_distance_ties() {
        // Both points are 5 along the dominant axis; the y offset
        // decides for an east-north-east segment.
        let coords = [c(0., 0.), c(10., 1.)];
        let low = SegmentNode::new(&coords, c(5., 0.49), 0);
        let high = SegmentNode::new(&coords, c(5., 0.51), 0);
        assert_eq!(low.distance(), high.distance());
        assert_eq!(low.cmp_position(&high), Ordering::Less);
        assert_eq!(high.cmp_position(&low), Ordering::Greater);
    }
}
