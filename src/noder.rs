//! Noding algorithms.
//!
//! A [`Noder`] takes ownership of a collection of segment strings,
//! computes every intersection between them (recording nodes through
//! its [`SegmentIntersector`](crate::SegmentIntersector)), and then
//! hands back the strings split at their nodes.
//!
//! ```rust
//! use geo::Coordinate;
//! use geo_noding::{IntersectionAdder, McIndexNoder, Noder, RobustLineIntersector, SegmentString};
//!
//! let chains = vec![
//!     SegmentString::new(vec![Coordinate { x: 0., y: 0. }, Coordinate { x: 10., y: 10. }], 'a'),
//!     SegmentString::new(vec![Coordinate { x: 0., y: 10. }, Coordinate { x: 10., y: 0. }], 'b'),
//! ];
//! let mut noder = McIndexNoder::new(IntersectionAdder::new(RobustLineIntersector::new()));
//! let pieces = noder.node(chains).unwrap();
//! assert_eq!(pieces.len(), 4);
//! ```
use geo::GeoFloat;

use crate::{NodingError, SegmentString};

mod simple;
pub use simple::SimpleNoder;

mod mc_index;
pub use mc_index::McIndexNoder;

mod iterated;
pub use iterated::IteratedNoder;

mod scaled;
pub use scaled::ScaledNoder;

/// Computes the noding of a collection of segment strings.
pub trait Noder<T: GeoFloat, D: Clone> {
    /// Take ownership of `chains` and record every intersection among
    /// them as nodes.
    fn compute_nodes(&mut self, chains: Vec<SegmentString<T, D>>) -> Result<(), NodingError>;

    /// Split the chains noded by the last call to
    /// [`compute_nodes`](Self::compute_nodes) at their nodes. The noder
    /// is left empty.
    fn noded_substrings(&mut self) -> Vec<SegmentString<T, D>>;

    /// Compute the nodes and return the noded substrings.
    fn node(
        &mut self,
        chains: Vec<SegmentString<T, D>>,
    ) -> Result<Vec<SegmentString<T, D>>, NodingError> {
        self.compute_nodes(chains)?;
        Ok(self.noded_substrings())
    }
}
