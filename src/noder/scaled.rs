use geo::{Coordinate, GeoFloat};
use log::debug;

use super::Noder;
use crate::{NodingError, PrecisionModel, SegmentString};

/// Wraps a noder so that it works on an integer grid.
///
/// Input coordinates are mapped through `round((p - offset) * scale)`
/// with consecutive repeated points removed; the noded output is
/// mapped back through the inverse transform. Chains that collapse to
/// a single point on the grid are dropped. A scale of one makes the
/// wrapper a pass-through.
#[derive(Debug, Clone)]
pub struct ScaledNoder<N, T: GeoFloat> {
    noder: N,
    scale: T,
    offset: Coordinate<T>,
}

impl<N, T: GeoFloat> ScaledNoder<N, T> {
    /// # Panics
    ///
    /// If `scale` is not a finite positive value.
    pub fn new(noder: N, scale: T) -> Self {
        assert!(
            scale.is_finite() && scale > T::zero(),
            "scale must be finite and positive"
        );
        ScaledNoder {
            noder,
            scale,
            offset: Coordinate {
                x: T::zero(),
                y: T::zero(),
            },
        }
    }

    /// Scale by the grid of `precision`; a floating model is not
    /// scaled at all.
    pub fn for_precision(noder: N, precision: &PrecisionModel<T>) -> Self {
        Self::new(noder, precision.scale().unwrap_or_else(T::one))
    }

    pub fn with_offset(mut self, offset: Coordinate<T>) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Whether coordinates are transformed at all.
    #[inline]
    pub fn is_integer_precision(&self) -> bool {
        self.scale == T::one()
    }

    /// Get a reference to the wrapped noder.
    pub fn noder(&self) -> &N {
        &self.noder
    }

    fn to_grid(&self, c: Coordinate<T>) -> Coordinate<T> {
        Coordinate {
            x: ((c.x - self.offset.x) * self.scale).round(),
            y: ((c.y - self.offset.y) * self.scale).round(),
        }
    }

    fn from_grid(&self, c: Coordinate<T>) -> Coordinate<T> {
        Coordinate {
            x: c.x / self.scale + self.offset.x,
            y: c.y / self.scale + self.offset.y,
        }
    }

    fn scale_chain<D>(&self, chain: SegmentString<T, D>) -> Option<SegmentString<T, D>> {
        let (coords, data) = chain.into_parts();
        let mut scaled: Vec<Coordinate<T>> = coords.into_iter().map(|c| self.to_grid(c)).collect();
        scaled.dedup();
        if scaled.len() < 2 {
            debug!("scaled noder: dropping chain collapsed to {scaled:?}");
            return None;
        }
        Some(SegmentString::new(scaled, data))
    }

    fn rescale_chain<D>(&self, chain: SegmentString<T, D>) -> SegmentString<T, D> {
        let (coords, data) = chain.into_parts();
        SegmentString::new(coords.into_iter().map(|c| self.from_grid(c)).collect(), data)
    }
}

impl<N, T, D> Noder<T, D> for ScaledNoder<N, T>
where
    N: Noder<T, D>,
    T: GeoFloat,
    D: Clone,
{
    fn compute_nodes(&mut self, chains: Vec<SegmentString<T, D>>) -> Result<(), NodingError> {
        let chains = if self.is_integer_precision() {
            chains
        } else {
            chains
                .into_iter()
                .filter_map(|chain| self.scale_chain(chain))
                .collect()
        };
        self.noder.compute_nodes(chains)
    }

    fn noded_substrings(&mut self) -> Vec<SegmentString<T, D>> {
        let chains = self.noder.noded_substrings();
        if self.is_integer_precision() {
            return chains;
        }
        chains
            .into_iter()
            .map(|chain| self.rescale_chain(chain))
            .collect()
    }
}
