use geo::{Coordinate, GeoFloat};
use log::debug;

use super::{intersection_message, line_wkt, Validation};
use crate::{
    InteriorIntersectionFinder, LineIntersector, Noder, NodingError, RobustLineIntersector,
    SegmentString, SimpleNoder,
};

/// Validates noding by testing every pair of segments.
///
/// In order, the checks are:
///
/// 1. no chain collapses back on itself (`a-b-a`),
/// 2. no two segments meet at a point interior to either,
/// 3. no chain end point equals an interior vertex of any chain.
///
/// Unless finding all, validation stops at the first failure.
pub struct NodingValidator<L: LineIntersector, D> {
    li: L,
    chains: Vec<SegmentString<L::Scalar, D>>,
    find_all: bool,
    result: Option<Validation<L::Scalar>>,
}

impl<T: GeoFloat, D: Clone> NodingValidator<RobustLineIntersector<T>, D> {
    pub fn new(chains: Vec<SegmentString<T, D>>) -> Self {
        NodingValidator {
            li: RobustLineIntersector::new(),
            chains,
            find_all: false,
            result: None,
        }
    }
}

impl<L: LineIntersector + Clone, D: Clone> NodingValidator<L, D> {
    pub fn with_intersector<M>(self, li: M) -> NodingValidator<M, D>
    where
        M: LineIntersector<Scalar = L::Scalar> + Clone,
    {
        NodingValidator {
            li,
            chains: self.chains,
            find_all: self.find_all,
            result: None,
        }
    }

    /// Run every check and report every offending location.
    pub fn with_find_all(mut self, find_all: bool) -> Self {
        self.find_all = find_all;
        self
    }

    pub fn is_valid(&mut self) -> bool {
        self.validation().error.is_none()
    }

    /// Fails with [`NodingError::Topology`] describing the first
    /// failed check.
    pub fn check_valid(&mut self) -> Result<(), NodingError> {
        self.validation().check()
    }

    pub fn error_message(&mut self) -> String {
        self.validation().message()
    }

    /// Offending locations found.
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
        let mut validation = Validation {
            error: None,
            intersections: vec![],
        };

        self.check_collapses(&mut validation);
        if validation.error.is_none() || self.find_all {
            self.check_interior_intersections(&mut validation);
        }
        if validation.error.is_none() || self.find_all {
            self.check_end_point_vertices(&mut validation);
        }

        if let Some(err) = &validation.error {
            debug!("validator: {err}");
        }
        validation
    }

    fn report(validation: &mut Validation<L::Scalar>, message: String, pt: Coordinate<L::Scalar>) {
        validation.intersections.push(pt);
        if validation.error.is_none() {
            validation.error = Some(NodingError::topology(message, Some(pt)));
        }
    }

    fn check_collapses(&self, validation: &mut Validation<L::Scalar>) {
        for chain in &self.chains {
            for w in chain.coords().windows(3) {
                if w[0] == w[2] {
                    let message = format!("found non-noded collapse at {}", line_wkt(w));
                    Self::report(validation, message, w[1]);
                    if !self.find_all {
                        return;
                    }
                }
            }
        }
    }

    fn check_interior_intersections(&mut self, validation: &mut Validation<L::Scalar>) {
        let finder = InteriorIntersectionFinder::new(self.li.clone()).with_find_all(self.find_all);
        let mut noder = SimpleNoder::new(finder);
        let run = noder.compute_nodes(std::mem::take(&mut self.chains));
        let (finder, chains) = noder.into_parts();
        self.chains = chains;

        if let Err(err) = run {
            validation.error.get_or_insert(err);
            return;
        }
        if let (Some(pt), Some(segments)) = (finder.intersection(), finder.intersection_segments()) {
            if validation.error.is_none() {
                validation.error = Some(NodingError::topology(intersection_message(&segments), Some(pt)));
            }
            validation.intersections.extend_from_slice(finder.intersections());
        }
    }

    fn check_end_point_vertices(&self, validation: &mut Validation<L::Scalar>) {
        for chain in &self.chains {
            let coords = chain.coords();
            for &end in &[coords[0], coords[coords.len() - 1]] {
                for other in &self.chains {
                    let interior = &other.coords()[1..other.count() - 1];
                    if let Some(i) = interior.iter().position(|&c| c == end) {
                        let message = format!(
                            "found endpoint/interior vertex intersection at index {} of {}",
                            i + 1,
                            line_wkt(other.coords())
                        );
                        Self::report(validation, message, end);
                        if !self.find_all {
                            return;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::Line;

    use super::*;
    use crate::{IntersectionAdder, McIndexNoder, SegmentIntersection};

    fn ss(coords: &[(f64, f64)]) -> SegmentString<f64, ()> {
        SegmentString::new(coords.iter().map(|&c| c.into()).collect(), ())
    }

    #[test]
    fn t_junction_is_valid() {
        let mut validator = NodingValidator::new(vec![
            ss(&[(0., 0.), (5., 5.)]),
            ss(&[(5., 5.), (10., 0.)]),
            ss(&[(5., 5.), (5., 10.)]),
        ]);
        assert!(validator.is_valid());
        assert_eq!(validator.error_message(), "no intersections found");
    }

    #[test]
    fn collapse_is_reported_first() {
        let mut validator = NodingValidator::new(vec![
            ss(&[(0., 0.), (5., 0.), (0., 0.)]),
            ss(&[(0., 10.), (10., -10.)]),
        ]);
        let err = validator.check_valid().unwrap_err();
        assert!(err.to_string().starts_with("found non-noded collapse"), "{}", err);
        assert_eq!(validator.intersections(), &[Coordinate { x: 5., y: 0. }]);
    }

    #[test]
    fn crossing_is_reported() {
        let mut validator = NodingValidator::new(vec![
            ss(&[(0., 0.), (10., 10.)]),
            ss(&[(0., 10.), (10., 0.)]),
        ]);
        match validator.check_valid() {
            Err(NodingError::Topology {
                message,
                coordinate,
            }) => {
                assert!(message.starts_with("found non-noded intersection"));
                assert_eq!(coordinate, Some(Coordinate { x: 5., y: 5. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn end_point_on_interior_vertex() {
        // Touches the interior vertex (5 5) without crossing; the fast
        // validator accepts this.
        let chains = vec![
            ss(&[(0., 0.), (5., 5.), (10., 0.)]),
            ss(&[(5., 5.), (5., 10.)]),
        ];
        assert!(crate::FastNodingValidator::new(chains.clone()).is_valid());

        let mut validator = NodingValidator::new(chains);
        assert!(!validator.is_valid());
        assert!(validator.error_message().starts_with("found endpoint/interior vertex"));
        assert_eq!(validator.intersections(), &[Coordinate { x: 5., y: 5. }]);
    }

    #[derive(Debug, Clone, Copy)]
    struct BlindIntersector;

    impl LineIntersector for BlindIntersector {
        type Scalar = f64;

        fn compute_intersection(&self, p: Line<f64>, q: Line<f64>) -> SegmentIntersection<f64> {
            SegmentIntersection::none(p, q)
        }
    }

    #[test]
    fn uses_given_intersector() {
        let chains = vec![
            ss(&[(0., 0.), (10., 10.)]),
            ss(&[(0., 10.), (10., 0.)]),
        ];
        assert!(!NodingValidator::new(chains.clone()).is_valid());

        let mut validator = NodingValidator::new(chains).with_intersector(BlindIntersector);
        assert!(validator.is_valid());
        assert!(validator.check_valid().is_ok());
    }

    #[test]
    fn find_all_runs_every_check() {
        let mut validator = NodingValidator::new(vec![
            ss(&[(0., 0.), (5., 0.), (0., 0.)]),
            ss(&[(0., 10.), (10., 0.)]),
            ss(&[(0., 0.), (10., 10.)]),
        ])
        .with_find_all(true);
        assert!(!validator.is_valid());
        assert!(validator.error_message().starts_with("found non-noded collapse"));
        assert!(validator.intersections().contains(&Coordinate { x: 5., y: 5. }));
    }

    #[test]
    fn noded_output_is_valid() {
        let mut noder = McIndexNoder::new(IntersectionAdder::new(RobustLineIntersector::new()));
        let pieces = noder
            .node(vec![
                ss(&[(0., 0.), (10., 10.), (10., 0.), (0., 10.)]),
                ss(&[(0., 2.), (10., 2.)]),
            ])
            .unwrap();
        let mut validator = NodingValidator::new(pieces);
        assert!(validator.is_valid(), "{}", validator.error_message());
    }
}
