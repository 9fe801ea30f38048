use geo::{
    algorithm::line_intersection::{line_intersection, LineIntersection},
    Coordinate, GeoFloat, Line,
};
use smallvec::{smallvec, SmallVec};

use crate::{LexPoint, PrecisionModel};

/// Computes the intersection of a pair of line segments.
///
/// Implementations are injected into the intersection strategies
/// (and through them into the noders); the default is
/// [`RobustLineIntersector`].
pub trait LineIntersector {
    type Scalar: GeoFloat;

    fn compute_intersection(
        &self,
        p: Line<Self::Scalar>,
        q: Line<Self::Scalar>,
    ) -> SegmentIntersection<Self::Scalar>;
}

/// Up to two intersection points; two means a collinear overlap.
pub type IntersectionPoints<T> = SmallVec<[Coordinate<T>; 2]>;

/// Outcome of intersecting two segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentIntersection<T: GeoFloat> {
    input: [Line<T>; 2],
    points: IntersectionPoints<T>,
    is_proper: bool,
}

impl<T: GeoFloat> SegmentIntersection<T> {
    /// A disjoint pair.
    pub fn none(p: Line<T>, q: Line<T>) -> Self {
        SegmentIntersection {
            input: [p, q],
            points: SmallVec::new(),
            is_proper: false,
        }
    }

    /// Build a result from computed points.
    ///
    /// `is_proper` is honoured only for a single point lying strictly
    /// inside both segments.
    ///
    /// # Panics
    ///
    /// If more than two points are given.
    pub fn new(p: Line<T>, q: Line<T>, points: IntersectionPoints<T>, is_proper: bool) -> Self {
        assert!(points.len() <= 2, "two segments meet in at most two points");
        let mut result = SegmentIntersection {
            input: [p, q],
            points,
            is_proper: false,
        };
        result.is_proper = is_proper
            && result.points.len() == 1
            && result.is_interior_intersection_for(0)
            && result.is_interior_intersection_for(1);
        result
    }

    /// Input segment `0` or `1`.
    #[inline]
    pub fn segment(&self, input_index: usize) -> Line<T> {
        self.input[input_index]
    }

    #[inline]
    pub fn has_intersection(&self) -> bool {
        !self.points.is_empty()
    }

    /// Number of intersection points: 0, 1 or 2.
    #[inline]
    pub fn intersection_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn intersection(&self, index: usize) -> Coordinate<T> {
        self.points[index]
    }

    #[inline]
    pub fn points(&self) -> &[Coordinate<T>] {
        &self.points
    }

    /// Whether the segments overlap along a sub-segment.
    #[inline]
    pub fn is_collinear(&self) -> bool {
        self.points.len() == 2
    }

    /// A single point interior to both segments.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.is_proper
    }

    /// Whether some intersection point is not an endpoint of both inputs.
    pub fn is_interior_intersection(&self) -> bool {
        self.is_interior_intersection_for(0) || self.is_interior_intersection_for(1)
    }

    /// Whether some intersection point is not an endpoint of the given input.
    pub fn is_interior_intersection_for(&self, input_index: usize) -> bool {
        let seg = self.input[input_index];
        self.points.iter().any(|&pt| pt != seg.start && pt != seg.end)
    }

    /// Edge distance of intersection `int_index` along input
    /// `input_index`, measured from the segment start.
    pub fn edge_distance(&self, input_index: usize, int_index: usize) -> T {
        let seg = self.input[input_index];
        edge_distance(self.points[int_index], seg.start, seg.end)
    }
}

/// A cheap, monotone proxy for the distance of `p` from `p0` along the
/// segment `p0 -> p1`.
///
/// Uses the delta along the dominant axis of the segment. Any point
/// other than `p0` gets a non-zero value.
pub fn edge_distance<T: GeoFloat>(p: Coordinate<T>, p0: Coordinate<T>, p1: Coordinate<T>) -> T {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();

    if p == p0 {
        T::zero()
    } else if p == p1 {
        dx.max(dy)
    } else {
        let pdx = (p.x - p0.x).abs();
        let pdy = (p.y - p0.y).abs();
        let dist = if dx > dy { pdx } else { pdy };
        if dist == T::zero() {
            pdx.max(pdy)
        } else {
            dist
        }
    }
}

/// Line intersector backed by the robust predicates of `geo`.
///
/// Proper intersection points are rounded through the configured
/// [`PrecisionModel`]. The inputs are put in a canonical order before
/// computing, so the same pair of segments yields bit-identical points
/// regardless of argument order or segment direction.
#[derive(Debug, Clone, Copy)]
pub struct RobustLineIntersector<T: GeoFloat> {
    precision: PrecisionModel<T>,
}

impl<T: GeoFloat> Default for RobustLineIntersector<T> {
    fn default() -> Self {
        RobustLineIntersector {
            precision: PrecisionModel::Floating,
        }
    }
}

impl<T: GeoFloat> RobustLineIntersector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(precision: PrecisionModel<T>) -> Self {
        RobustLineIntersector { precision }
    }

    /// Get the intersector's precision model.
    #[inline]
    pub fn precision(&self) -> &PrecisionModel<T> {
        &self.precision
    }
}

impl<T: GeoFloat> LineIntersector for RobustLineIntersector<T> {
    type Scalar = T;

    fn compute_intersection(&self, p: Line<T>, q: Line<T>) -> SegmentIntersection<T> {
        let (a, b) = {
            let a = canonical(p);
            let b = canonical(q);
            if ordered_key(a) <= ordered_key(b) {
                (a, b)
            } else {
                (b, a)
            }
        };

        match line_intersection(a, b) {
            None => SegmentIntersection::none(p, q),
            Some(LineIntersection::SinglePoint {
                intersection,
                is_proper,
            }) => {
                let pt = if is_proper {
                    self.precision.make_precise(intersection)
                } else {
                    intersection
                };
                SegmentIntersection::new(p, q, smallvec![pt], is_proper)
            }
            Some(LineIntersection::Collinear { intersection }) => SegmentIntersection::new(
                p,
                q,
                smallvec![intersection.start, intersection.end],
                false,
            ),
        }
    }
}

/// Direct the line from its lexicographically smaller endpoint.
fn canonical<T: GeoFloat>(line: Line<T>) -> Line<T> {
    if LexPoint::from(line.start) <= LexPoint::from(line.end) {
        line
    } else {
        Line::new(line.end, line.start)
    }
}

fn ordered_key<T: GeoFloat>(line: Line<T>) -> (LexPoint<T>, LexPoint<T>) {
    (line.start.into(), line.end.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(a: (f64, f64), b: (f64, f64)) -> Line<f64> {
        Line::new(Coordinate::from(a), Coordinate::from(b))
    }

    #[test]
    fn proper_crossing() {
        let li = RobustLineIntersector::new();
        let r = li.compute_intersection(line((0., 0.), (10., 10.)), line((0., 10.), (10., 0.)));
        assert!(r.has_intersection());
        assert_eq!(r.intersection_count(), 1);
        assert!(r.is_proper());
        assert!(r.is_interior_intersection());
        assert_eq!(r.intersection(0), Coordinate { x: 5., y: 5. });
        assert_eq!(r.edge_distance(0, 0), 5.);
    }

    #[test]
    fn disjoint() {
        let li = RobustLineIntersector::new();
        let r = li.compute_intersection(line((0., 0.), (1., 0.)), line((0., 1.), (1., 1.)));
        assert!(!r.has_intersection());
        assert!(!r.is_proper());
        assert!(!r.is_interior_intersection());
    }

    #[test]
    fn shared_endpoint_is_not_interior() {
        let li = RobustLineIntersector::new();
        let r = li.compute_intersection(line((0., 0.), (1., 1.)), line((1., 1.), (2., 0.)));
        assert_eq!(r.intersection_count(), 1);
        assert!(!r.is_proper());
        assert!(!r.is_interior_intersection());
    }

    #[test]
    fn touching_interior_of_one() {
        // T-junction: the end of q lies inside p.
        let li = RobustLineIntersector::new();
        let r = li.compute_intersection(line((0., 0.), (10., 0.)), line((5., 5.), (5., 0.)));
        assert_eq!(r.points(), &[Coordinate { x: 5., y: 0. }]);
        assert!(!r.is_proper());
        assert!(r.is_interior_intersection_for(0));
        assert!(!r.is_interior_intersection_for(1));
    }

    #[test]
    fn collinear_overlap() {
        let li = RobustLineIntersector::new();
        let r = li.compute_intersection(line((0., 0.), (10., 0.)), line((12., 0.), (4., 0.)));
        assert!(r.is_collinear());
        let mut xs: Vec<_> = r.points().iter().map(|c| c.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, vec![4., 10.]);
        assert!(r.is_interior_intersection());
    }

    #[test]
    fn symmetric_in_argument_order() {
        let li = RobustLineIntersector::new();
        let p = line((0.1, 0.3), (9.7, 7.3));
        let q = line((0.2, 8.9), (8.3, 0.7));
        let pq = li.compute_intersection(p, q);
        let qp = li.compute_intersection(q, p);
        let rev = li.compute_intersection(Line::new(q.end, q.start), Line::new(p.end, p.start));
        assert_eq!(pq.points(), qp.points());
        assert_eq!(pq.points(), rev.points());
    }

    #[test]
    fn rounds_proper_points() {
        let li = RobustLineIntersector::with_precision(PrecisionModel::fixed(1.));
        let r = li.compute_intersection(line((0., 0.), (10., 3.)), line((0., 3.), (10., 0.)));
        assert_eq!(r.points(), &[Coordinate { x: 5., y: 2. }]);
    }

    #[test]
    fn edge_distance_is_never_zero_off_start() {
        let p0 = Coordinate { x: 0., y: 0. };
        let p1 = Coordinate { x: 10., y: 1. };
        assert_eq!(edge_distance(p0, p0, p1), 0.);
        assert_eq!(edge_distance(p1, p0, p1), 10.);
        assert_eq!(edge_distance(Coordinate { x: 4., y: 0.4 }, p0, p1), 4.);
        // Point displaced only along the minor axis.
        assert_eq!(edge_distance(Coordinate { x: 0., y: 0.1 }, p0, p1), 0.1);
    }
}
