//! # PepHire Core Library
//!
//! Ladderon-guided generation of fixed-length peptide candidates for iterative
//! peptide design.
//!
//! A pool of peptides is decomposed into reusable substrings ("ladderons") by an
//! external model. New candidates are assembled by placing those substrings at
//! positions where they already occur in the pool, each drawn with probability
//! proportional to multiplicity times length, until every position is filled.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Sequence and pool models, the ladderon
//!   decomposition contract, sequence file I/O and substring search.
//!
//! - **[`engine`]: The Generator.** Address index, weighted catalog, the
//!   assembler and the batch generator, with configuration, progress reporting
//!   and error types.
//!
//! - **[`workflows`]: The Public API.** One generation step from pool to batch,
//!   and pool update from selected survivors.

pub mod core;
pub mod engine;
pub mod workflows;
