//! # Core Models Module
//!
//! Value types describing the peptide corpus.
//!
//! - [`sequence`] - Validated one-letter peptide sequences and the fixed-length [`sequence::Pool`]
//! - [`ladderon`] - Reusable substrings and their multiplicities

pub mod ladderon;
pub mod sequence;
