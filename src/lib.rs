//! Noding of line segment strings.
//!
//! Noding computes every intersection among a collection of polylines
//! (segment strings) and splits them so that pieces only meet at their
//! end points. It is the step that makes an arbitrary set of lines
//! ready for overlay, union or polygon building.
//!
//! 1. [Segment Strings](#segment-strings)
//! 1. [Noders](#noders)
//! 1. [Validation](#validation)
//!
//! # Segment Strings
//!
//! A [`SegmentString`] is a polyline together with a caller supplied
//! data value. Intersections are recorded on it as nodes (see
//! [`SegmentNodeList`]), ordered along the string robustly with the
//! [`Octant`] of each segment and the [`segment_point`] comparator.
//! Splitting at the nodes yields new segment strings that carry a
//! clone of the parent's data.
//!
//! # Noders
//!
//! A [`Noder`] enumerates candidate segment pairs and hands each one to
//! a pluggable [`SegmentIntersector`] strategy:
//!
//! - [`IntersectionAdder`] records every intersection as nodes,
//! - [`InteriorIntersectionFinder`] looks for an intersection interior
//!   to a segment,
//! - [`SegmentIntersectionDetector`] classifies the intersections
//!   present.
//!
//! Pairs come from [`SimpleNoder`] (every pair) or [`McIndexNoder`]
//! (monotone chains in an R-tree). [`IteratedNoder`] repeats index
//! noding until rounding introduces no further intersections, and
//! [`ScaledNoder`] runs another noder on an integer grid.
//!
//! ```rust
//! use geo::Coordinate;
//! use geo_noding::{IteratedNoder, Noder, PrecisionModel, SegmentString};
//!
//! let chains = vec![
//!     SegmentString::new(vec![Coordinate { x: 0., y: 0. }, Coordinate { x: 10., y: 10. }], 1),
//!     SegmentString::new(vec![Coordinate { x: 0., y: 10. }, Coordinate { x: 10., y: 0. }], 2),
//! ];
//! let mut noder = IteratedNoder::new(PrecisionModel::fixed(1.));
//! let pieces = noder.node(chains).unwrap();
//! assert_eq!(pieces.len(), 4);
//! ```
//!
//! # Validation
//!
//! [`FastNodingValidator`] and [`NodingValidator`] check that a
//! collection is correctly noded, failing with
//! [`NodingError::Topology`] otherwise.
mod error;
pub use error::NodingError;

mod precision;
pub use precision::PrecisionModel;

mod lex_point;
pub use lex_point::LexPoint;

mod octant;
pub use octant::Octant;

pub mod segment_point;

pub mod intersector;
pub use intersector::{edge_distance, LineIntersector, RobustLineIntersector, SegmentIntersection};

mod segment_string;
pub use segment_string::{noded_substrings, SegmentNode, SegmentNodeList, SegmentString};

pub mod strategy;
pub use strategy::{
    InteriorIntersectionFinder, IntersectionAdder, SegmentIntersectionDetector,
    SegmentIntersector, SegmentKey,
};

pub mod index;

pub mod noder;
pub use noder::{IteratedNoder, McIndexNoder, Noder, ScaledNoder, SimpleNoder};

pub mod validate;
pub use validate::{FastNodingValidator, NodingValidator};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
