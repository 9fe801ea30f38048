use geo::{Coordinate, GeoFloat};

/// The rounding contract applied to computed coordinates.
///
/// A `Fixed` model snaps values to a grid of spacing `1 / scale`; a
/// `Floating` model leaves values untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrecisionModel<T: GeoFloat> {
    Floating,
    Fixed { scale: T },
}

impl<T: GeoFloat> Default for PrecisionModel<T> {
    fn default() -> Self {
        PrecisionModel::Floating
    }
}

impl<T: GeoFloat> PrecisionModel<T> {
    /// Create a fixed precision model.
    ///
    /// # Panics
    ///
    /// If `scale` is not a finite positive value.
    pub fn fixed(scale: T) -> Self {
        assert!(
            scale.is_finite() && scale > T::zero(),
            "precision scale must be finite and positive"
        );
        PrecisionModel::Fixed { scale }
    }

    /// The scale factor, or `None` for a floating model.
    #[inline]
    pub fn scale(&self) -> Option<T> {
        match self {
            PrecisionModel::Floating => None,
            PrecisionModel::Fixed { scale } => Some(*scale),
        }
    }

    #[inline]
    pub fn is_floating(&self) -> bool {
        matches!(self, PrecisionModel::Floating)
    }

    /// Spacing between adjacent grid values (zero for floating).
    pub fn grid_size(&self) -> T {
        match self {
            PrecisionModel::Floating => T::zero(),
            PrecisionModel::Fixed { scale } => T::one() / *scale,
        }
    }

    /// Round a single value to this model.
    pub fn make_precise_value(&self, value: T) -> T {
        match self {
            PrecisionModel::Floating => value,
            PrecisionModel::Fixed { scale } => (value * *scale).round() / *scale,
        }
    }

    /// Round a coordinate to this model.
    pub fn make_precise(&self, coord: Coordinate<T>) -> Coordinate<T> {
        Coordinate {
            x: self.make_precise_value(coord.x),
            y: self.make_precise_value(coord.y),
        }
    }
}
