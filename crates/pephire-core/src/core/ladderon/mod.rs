//! Ladderon statistics consumed by the generator.
//!
//! The decomposition of a pool into ladderons is computed by an external model.
//! [`corpus::LadderonCorpusModel`] is the seam for plugging one in;
//! [`precomputed::PrecomputedCorpus`] reads a decomposition the external tool has
//! already written to disk.

pub mod corpus;
pub mod precomputed;
