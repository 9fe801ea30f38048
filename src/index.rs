//! Candidate pruning for the index noder.
//!
//! Every segment string is decomposed into [monotone
//! chains](MonotoneChain): maximal runs of segments that all point into
//! the same quadrant. The envelope of such a run is spanned by its two
//! end points, and any sub-run of it is again monotone, which lets
//! [`MonotoneChain::overlap_pairs`] locate overlapping segments by
//! repeated halving. Chain envelopes are stored in an
//! [`EnvelopeIndex`], an R-tree over axis aligned rectangles.
mod chain;
pub use chain::{monotone_chains, MonotoneChain};

mod tree;
pub use tree::EnvelopeIndex;
