//! Provides input/output for peptide sequence files.
//!
//! Pools are read from plain text, FASTA or CSV files and generated batches are
//! written back in any of the three. All formats share the [`traits::SequenceFile`]
//! interface; [`format::SequenceFormat`] selects one at runtime.

pub mod fasta;
pub mod format;
pub mod plain;
pub mod tabular;
pub mod traits;
