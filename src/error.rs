use geo::{Coordinate, GeoFloat};
use thiserror::Error;

/// Errors raised while noding or validating segment strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodingError {
    /// A zero-length segment was asked for its direction.
    #[error("cannot compute the octant of a zero-length segment")]
    InvalidSegment,

    /// The interior intersection count grew between two rounds of
    /// iterated noding.
    #[error(
        "iterated noding failed to converge after {iterations} iterations \
         ({interior_intersections} interior intersections)"
    )]
    NonConvergence {
        iterations: usize,
        interior_intersections: usize,
    },

    /// A noded set still contains an intersection it should not.
    #[error("{message}{}", describe_location(.coordinate))]
    Topology {
        message: String,
        coordinate: Option<Coordinate<f64>>,
    },
}

impl NodingError {
    pub(crate) fn topology<T: GeoFloat>(message: String, coordinate: Option<Coordinate<T>>) -> Self {
        NodingError::Topology {
            message,
            coordinate: coordinate.map(to_f64),
        }
    }
}

fn describe_location(coordinate: &Option<Coordinate<f64>>) -> String {
    match coordinate {
        Some(c) => format!(" [ ({}, {}) ]", c.x, c.y),
        None => String::new(),
    }
}

/// Widen a coordinate to `f64`, for diagnostics and index envelopes.
pub(crate) fn to_f64<T: GeoFloat>(c: Coordinate<T>) -> Coordinate<f64> {
    Coordinate {
        x: c.x.to_f64().unwrap_or(f64::NAN),
        y: c.y.to_f64().unwrap_or(f64::NAN),
    }
}
