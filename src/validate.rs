//! Checks that a collection of segment strings is correctly noded.
//!
//! [`FastNodingValidator`] runs an index noder with an
//! [`InteriorIntersectionFinder`](crate::InteriorIntersectionFinder)
//! and is the one to use on real data. [`NodingValidator`] compares
//! every pair of segments and additionally checks for collapses and
//! for chain end points lying on interior vertices; it is meant for
//! tests and small inputs.
use geo::{Coordinate, GeoFloat, LineString};
use wkt::ToWkt;

use crate::{error::to_f64, NodingError};

mod fast;
pub use fast::FastNodingValidator;

mod brute;
pub use brute::NodingValidator;

/// Outcome of a validation run.
#[derive(Debug, Clone)]
pub(crate) struct Validation<T: GeoFloat> {
    pub(crate) error: Option<NodingError>,
    pub(crate) intersections: Vec<Coordinate<T>>,
}

impl<T: GeoFloat> Validation<T> {
    pub(crate) fn check(&self) -> Result<(), NodingError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub(crate) fn message(&self) -> String {
        match &self.error {
            Some(err) => err.to_string(),
            None => "no intersections found".to_string(),
        }
    }
}

/// WKT of the line through `coords`.
pub(crate) fn line_wkt<T: GeoFloat>(coords: &[Coordinate<T>]) -> String {
    LineString(coords.iter().copied().map(to_f64).collect::<Vec<_>>()).wkt_string()
}

/// Message naming the two segments of a non-noded intersection.
pub(crate) fn intersection_message<T: GeoFloat>(segments: &[Coordinate<T>; 4]) -> String {
    format!(
        "found non-noded intersection between {} and {}",
        line_wkt(&segments[0..2]),
        line_wkt(&segments[2..4])
    )
}
