use geo::{Coordinate, GeoFloat, Rect};
use smallvec::SmallVec;

const CHAIN_STACK_SIZE: usize = 8;

/// A run of segments of one segment string, monotone in both axes.
#[derive(Debug, Clone)]
pub struct MonotoneChain<T: GeoFloat> {
    coords: SmallVec<[Coordinate<T>; CHAIN_STACK_SIZE]>,
    start: usize,
    chain: usize,
    envelope: Rect<T>,
    id: usize,
}

impl<T: GeoFloat> MonotoneChain<T> {
    fn new(coords: &[Coordinate<T>], start: usize, end: usize, chain: usize) -> Self {
        debug_assert!(start < end);
        MonotoneChain {
            coords: SmallVec::from_slice(&coords[start..=end]),
            start,
            chain,
            envelope: Rect::new(coords[start], coords[end]),
            id: 0,
        }
    }

    /// Index of the owning segment string.
    #[inline]
    pub fn chain(&self) -> usize {
        self.chain
    }

    /// Index of the first segment of the run in the owning string.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the index of the last segment of the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.coords.len() - 1
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.coords.len() - 1
    }

    #[inline]
    pub fn coords(&self) -> &[Coordinate<T>] {
        &self.coords
    }

    #[inline]
    pub fn envelope(&self) -> Rect<T> {
        self.envelope
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    /// Segment pairs of `self` and `other` whose envelopes overlap,
    /// each envelope expanded by `tolerance`.
    ///
    /// Segments are reported by their index in the owning segment
    /// strings.
    pub fn overlap_pairs(&self, other: &MonotoneChain<T>, tolerance: T) -> Vec<(usize, usize)> {
        let mut pairs = vec![];
        if rects_overlap(self.envelope, other.envelope, tolerance) {
            self.compute_overlaps(
                0,
                self.coords.len() - 1,
                other,
                0,
                other.coords.len() - 1,
                tolerance,
                &mut pairs,
            );
        }
        pairs
    }

    #[allow(clippy::too_many_arguments)]
    fn compute_overlaps(
        &self,
        start0: usize,
        end0: usize,
        other: &MonotoneChain<T>,
        start1: usize,
        end1: usize,
        tolerance: T,
        pairs: &mut Vec<(usize, usize)>,
    ) {
        let env0 = Rect::new(self.coords[start0], self.coords[end0]);
        let env1 = Rect::new(other.coords[start1], other.coords[end1]);
        if !rects_overlap(env0, env1, tolerance) {
            return;
        }

        if end0 - start0 == 1 && end1 - start1 == 1 {
            pairs.push((self.start + start0, other.start + start1));
            return;
        }

        let mid0 = (start0 + end0) / 2;
        let mid1 = (start1 + end1) / 2;
        // A single segment is never split; its half of the range is
        // the whole segment.
        let halves0 = if end0 - start0 == 1 {
            [(start0, end0), (end0, end0)]
        } else {
            [(start0, mid0), (mid0, end0)]
        };
        let halves1 = if end1 - start1 == 1 {
            [(start1, end1), (end1, end1)]
        } else {
            [(start1, mid1), (mid1, end1)]
        };

        for &(s0, e0) in halves0.iter().filter(|(s, e)| s < e) {
            for &(s1, e1) in halves1.iter().filter(|(s, e)| s < e) {
                self.compute_overlaps(s0, e0, other, s1, e1, tolerance, pairs);
            }
        }
    }
}

/// Whether two rectangles overlap once each side is pushed out by
/// `tolerance`. Touching rectangles overlap.
pub(crate) fn rects_overlap<T: GeoFloat>(a: Rect<T>, b: Rect<T>, tolerance: T) -> bool {
    !(a.max().x + tolerance < b.min().x
        || b.max().x + tolerance < a.min().x
        || a.max().y + tolerance < b.min().y
        || b.max().y + tolerance < a.min().y)
}

/// Quadrant of the direction `p0 -> p1`, or `None` if the points are
/// equal. Directions along an axis fall in the quadrant with
/// non-negative components on that axis.
fn quadrant<T: GeoFloat>(p0: Coordinate<T>, p1: Coordinate<T>) -> Option<u8> {
    if p0 == p1 {
        return None;
    }
    let east = p1.x >= p0.x;
    let north = p1.y >= p0.y;
    Some(match (east, north) {
        (true, true) => 0,
        (false, true) => 1,
        (false, false) => 2,
        (true, false) => 3,
    })
}

/// Index of the last point of the monotone run beginning at `start`.
///
/// Zero-length segments take the quadrant of the run they sit in.
fn find_chain_end<T: GeoFloat>(coords: &[Coordinate<T>], start: usize) -> usize {
    let last = coords.len() - 1;
    let quad = match (start..last).find_map(|i| quadrant(coords[i], coords[i + 1])) {
        Some(quad) => quad,
        // Only zero-length segments remain.
        None => return last,
    };

    let mut end = start + 1;
    while end < last {
        match quadrant(coords[end], coords[end + 1]) {
            Some(q) if q != quad => break,
            _ => end += 1,
        }
    }
    end
}

/// Decompose the point sequence of segment string `chain` into
/// monotone chains covering every segment exactly once.
pub fn monotone_chains<T: GeoFloat>(coords: &[Coordinate<T>], chain: usize) -> Vec<MonotoneChain<T>> {
    let mut chains = vec![];
    if coords.len() < 2 {
        return chains;
    }

    let mut start = 0;
    while start < coords.len() - 1 {
        let end = find_chain_end(coords, start);
        chains.push(MonotoneChain::new(coords, start, end, chain));
        start = end;
    }
    chains
}
