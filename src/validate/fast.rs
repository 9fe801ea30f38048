use geo::{Coordinate, GeoFloat};
use log::debug;

use super::{intersection_message, Validation};
use crate::{
    InteriorIntersectionFinder, LineIntersector, McIndexNoder, Noder, NodingError,
    RobustLineIntersector, SegmentString,
};

/// Validates noding with an index noder, looking for interior
/// intersections.
///
/// The check runs once, on the first query of the result.
pub struct FastNodingValidator<L: LineIntersector, D> {
    li: L,
    chains: Vec<SegmentString<L::Scalar, D>>,
    find_all: bool,
    result: Option<Validation<L::Scalar>>,
}

impl<T: GeoFloat, D: Clone> FastNodingValidator<RobustLineIntersector<T>, D> {
    pub fn new(chains: Vec<SegmentString<T, D>>) -> Self {
        FastNodingValidator {
            li: RobustLineIntersector::new(),
            chains,
            find_all: false,
            result: None,
        }
    }
}

impl<L: LineIntersector + Clone, D: Clone> FastNodingValidator<L, D> {
    /// Use `li` to compute intersections.
    pub fn with_intersector<M>(self, li: M) -> FastNodingValidator<M, D>
    where
        M: LineIntersector<Scalar = L::Scalar> + Clone,
    {
        FastNodingValidator {
            li,
            chains: self.chains,
            find_all: self.find_all,
            result: None,
        }
    }

    /// Collect every interior intersection instead of stopping at the
    /// first.
    pub fn with_find_all(mut self, find_all: bool) -> Self {
        self.find_all = find_all;
        self
    }

    pub fn is_valid(&mut self) -> bool {
        self.validation().error.is_none()
    }

    /// Fails with [`NodingError::Topology`] if an interior intersection
    /// exists.
    pub fn check_valid(&mut self) -> Result<(), NodingError> {
        self.validation().check()
    }

    /// Description of the result.
    pub fn error_message(&mut self) -> String {
        self.validation().message()
    }

    /// Interior intersections found.
    pub fn intersections(&mut self) -> &[Coordinate<L::Scalar>] {
        &self.validation().intersections
    }

    pub fn into_segment_strings(self) -> Vec<SegmentString<L::Scalar, D>> {
        self.chains
    }

    fn validation(&mut self) -> &Validation<L::Scalar> {
        let result = match self.result.take() {
            Some(result) => result,
            None => self.execute(),
        };
        self.result.get_or_insert(result)
    }

    fn execute(&mut self) -> Validation<L::Scalar> {
        let finder = InteriorIntersectionFinder::new(self.li.clone()).with_find_all(self.find_all);
        let mut noder = McIndexNoder::new(finder);
        let run = noder.compute_nodes(std::mem::take(&mut self.chains));
        let (finder, chains) = noder.into_parts();
        self.chains = chains;

        let error = match (run, finder.intersection(), finder.intersection_segments()) {
            (Err(err), _, _) => Some(err),
            (Ok(()), Some(pt), Some(segments)) => {
                let err = NodingError::topology(intersection_message(&segments), Some(pt));
                debug!("validator: {err}");
                Some(err)
            }
            (Ok(()), _, _) => None,
        };
        Validation {
            error,
            intersections: finder.intersections().to_vec(),
        }
    }
}
