//! # Engine Module
//!
//! The stochastic sequence generator.
//!
//! ## Overview
//!
//! A generation step turns a ladderon decomposition of the current pool into a
//! [`book::PoolBook`]: an [`address::AddressIndex`] recording where every
//! ladderon occurs and a [`catalog::WeightedCatalog`] weighting each ladderon by
//! multiplicity times length. The [`assembler::SequenceAssembler`] fills a
//! fixed-length buffer by weighted random placements drawn from the book, and
//! the [`batch::PoolBatchGenerator`] repeats that to produce a batch of new
//! candidates, optionally discarding repeats of the batch and the pool.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Batch size, duplicate policy, ladderon size cap and attempt bound
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting of phases and candidates
//! - **Error Handling** ([`error`]) - Engine-specific error type
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a batch exactly.

pub mod address;
pub mod assembler;
pub mod batch;
pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod progress;
pub mod utils;
