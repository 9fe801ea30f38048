use std::marker::PhantomData;

use geo::{GeoFloat, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::error::to_f64;

/// An item stored with its envelope.
struct Entry<I> {
    envelope: AABB<[f64; 2]>,
    item: I,
}

impl<I> RTreeObject for Entry<I> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope.clone()
    }
}

// Envelopes are widened to `f64`, which is exact for `f32` and `f64`.
fn to_aabb<T: GeoFloat>(rect: Rect<T>) -> AABB<[f64; 2]> {
    let (min, max) = (to_f64(rect.min()), to_f64(rect.max()));
    AABB::from_corners([min.x, min.y], [max.x, max.y])
}

/// R-tree of items keyed by their bounding rectangle.
pub struct EnvelopeIndex<T: GeoFloat, I> {
    tree: RTree<Entry<I>>,
    _scalar: PhantomData<T>,
}

impl<T: GeoFloat, I> Default for EnvelopeIndex<T, I> {
    fn default() -> Self {
        EnvelopeIndex {
            tree: RTree::new(),
            _scalar: PhantomData,
        }
    }
}

impl<T: GeoFloat, I> EnvelopeIndex<T, I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from all items at once.
    pub fn bulk_load<It: IntoIterator<Item = (Rect<T>, I)>>(items: It) -> Self {
        let entries = items
            .into_iter()
            .map(|(rect, item)| Entry {
                envelope: to_aabb(rect),
                item,
            })
            .collect();
        EnvelopeIndex {
            tree: RTree::bulk_load(entries),
            _scalar: PhantomData,
        }
    }

    pub fn insert(&mut self, envelope: Rect<T>, item: I) {
        self.tree.insert(Entry {
            envelope: to_aabb(envelope),
            item,
        });
    }

    /// Items whose envelope intersects `envelope`. Touching envelopes
    /// intersect.
    pub fn query(&self, envelope: Rect<T>) -> impl Iterator<Item = &I> + '_ {
        self.tree
            .locate_in_envelope_intersecting(&to_aabb(envelope))
            .map(|entry| &entry.item)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use geo::Coordinate;

    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect<f64> {
        Rect::new(Coordinate { x: x0, y: y0 }, Coordinate { x: x1, y: y1 })
    }

    #[test]
    fn query_returns_intersecting() {
        let mut index = EnvelopeIndex::new();
        index.insert(rect(0., 0., 1., 1.), 'a');
        index.insert(rect(2., 2., 3., 3.), 'b');
        index.insert(rect(1., 1., 2., 2.), 'c');
        assert_eq!(index.len(), 3);

        let mut found: Vec<_> = index.query(rect(0.5, 0.5, 0.9, 0.9)).copied().collect();
        assert_eq!(found, vec!['a']);

        // Touching at a corner counts.
        found = index.query(rect(3., 3., 4., 4.)).copied().collect();
        assert_eq!(found, vec!['b']);

        found = index.query(rect(0., 0., 3., 3.)).copied().collect();
        found.sort_unstable();
        assert_eq!(found, vec!['a', 'b', 'c']);

        assert_eq!(index.query(rect(5., 5., 6., 6.)).count(), 0);
    }

    #[test]
    fn bulk_load_matches_insert() {
        let rects: Vec<_> = (0..50)
            .map(|i| {
                let x = i as f64;
                (rect(x, 0., x + 1.5, 1.), i)
            })
            .collect();
        let index = EnvelopeIndex::bulk_load(rects);
        let mut found: Vec<_> = index.query(rect(10.2, 0.5, 10.4, 0.6)).copied().collect();
        found.sort_unstable();
        assert_eq!(found, vec![9, 10]);
    }

    #[test]
    fn single_precision_envelopes() {
        let r = |x0: f32, x1: f32| Rect::new(Coordinate { x: x0, y: 0. }, Coordinate { x: x1, y: 1. });
        let index = EnvelopeIndex::bulk_load(vec![(r(0., 1.), 'a'), (r(0.1, 0.2), 'b'), (r(2., 3.), 'c')]);
        let mut found: Vec<_> = index.query(r(0.15, 1.)).copied().collect();
        found.sort_unstable();
        assert_eq!(found, vec!['a', 'b']);
        assert!(!index.is_empty());
    }
}
