//! Segment strings and the bookkeeping of their nodes.
//!
//! A [`SegmentString`] is an immutable polyline of at least two points
//! together with an opaque data value supplied by the caller. The
//! noding strategies record intersections on it with
//! [`SegmentString::add_intersection`]; once noding is complete,
//! [`SegmentString::split_chains`] (or [`noded_substrings`] for a whole
//! collection) yields the pieces between consecutive nodes. Every piece
//! carries a clone of the parent's data.
mod node;
pub use node::SegmentNode;

mod node_list;
pub use node_list::SegmentNodeList;

use geo::{Coordinate, GeoFloat, Line, LineString};

use crate::{intersector::SegmentIntersection, Octant};

#[derive(Debug, Clone)]
pub struct SegmentString<T: GeoFloat, D> {
    coords: Vec<Coordinate<T>>,
    data: D,
    nodes: SegmentNodeList<T>,
}

impl<T: GeoFloat, D> SegmentString<T, D> {
    /// Create a segment string over `coords`.
    ///
    /// # Panics
    ///
    /// If fewer than two coordinates are given.
    pub fn new(coords: Vec<Coordinate<T>>, data: D) -> Self {
        assert!(
            coords.len() > 1,
            "segment string requires at least two points"
        );
        SegmentString {
            coords,
            data,
            nodes: SegmentNodeList::default(),
        }
    }

    pub fn from_line_string(ls: LineString<T>, data: D) -> Self {
        Self::new(ls.0, data)
    }

    #[inline]
    pub fn coords(&self) -> &[Coordinate<T>] {
        &self.coords
    }

    #[inline]
    pub fn coord(&self, index: usize) -> Coordinate<T> {
        self.coords[index]
    }

    /// The segment from point `index` to point `index + 1`.
    #[inline]
    pub fn segment(&self, index: usize) -> Line<T> {
        Line::new(self.coords[index], self.coords[index + 1])
    }

    /// Get a reference to the caller supplied data.
    #[inline]
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Number of points.
    #[inline]
    pub fn count(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.coords.len() - 1
    }

    /// Whether the first and last points are exactly equal.
    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    /// Whether `index` is the first or the last segment.
    #[inline]
    pub fn is_end_segment(&self, index: usize) -> bool {
        index == 0 || index + 1 >= self.segment_count()
    }

    /// Octant of segment `index`, or `None` for a zero-length segment
    /// or an index past the last segment.
    pub fn segment_octant(&self, index: usize) -> Option<Octant> {
        let p1 = *self.coords.get(index + 1)?;
        Octant::of_segment(self.coords[index], p1).ok()
    }

    /// Get a reference to the recorded nodes.
    #[inline]
    pub fn nodes(&self) -> &SegmentNodeList<T> {
        &self.nodes
    }

    /// Record an intersection at `coord` on segment `segment_index`.
    ///
    /// A point equal to the segment's end vertex is attributed to the
    /// following segment, so a node at a vertex is recorded the same
    /// way whichever adjacent segment reported it.
    pub fn add_intersection(&mut self, coord: Coordinate<T>, segment_index: usize) {
        let mut index = segment_index;
        if self.coords.get(index + 1) == Some(&coord) {
            index += 1;
        }
        self.nodes.add(&self.coords, coord, index);
    }

    /// Record every point of an intersection result on segment
    /// `segment_index`.
    pub fn add_intersections(&mut self, result: &SegmentIntersection<T>, segment_index: usize) {
        for &pt in result.points() {
            self.add_intersection(pt, segment_index);
        }
    }

    /// Ensure the first and last points are nodes.
    pub fn add_endpoints(&mut self) {
        self.nodes.add_endpoints(&self.coords);
    }

    /// The point sequence with every node inserted.
    pub fn noded_coordinates(&mut self) -> Vec<Coordinate<T>> {
        self.nodes.split_coordinates(&self.coords)
    }

    pub fn to_line_string(&self) -> LineString<T> {
        LineString(self.coords.clone())
    }

    /// Dissolve into the point sequence and data.
    pub fn into_parts(self) -> (Vec<Coordinate<T>>, D) {
        (self.coords, self.data)
    }
}

impl<T: GeoFloat, D: Clone> SegmentString<T, D> {
    /// Split into the sub-chains between consecutive nodes.
    ///
    /// The endpoints are added as nodes first, so a chain without
    /// intersections yields a single copy of itself.
    pub fn split_chains(&mut self) -> Vec<SegmentString<T, D>> {
        self.nodes.split_chains(&self.coords, &self.data)
    }
}

/// Split every chain at its nodes and collect the pieces.
pub fn noded_substrings<T, D, I>(chains: I) -> Vec<SegmentString<T, D>>
where
    T: GeoFloat,
    D: Clone,
    I: IntoIterator<Item = SegmentString<T, D>>,
{
    chains
        .into_iter()
        .flat_map(|mut chain| chain.split_chains())
        .collect()
}
