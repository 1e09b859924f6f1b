//! # Core Module
//!
//! Stateless building blocks shared by the generator engine and the workflows.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Peptide sequences, pools and ladderons
//! - **Ladderon Statistics** ([`ladderon`]) - The contract with the external
//!   substring-decomposition model and a file-backed implementation of it
//! - **File I/O** ([`io`]) - Reading pools and writing candidate batches as plain
//!   text, FASTA or CSV
//! - **Utilities** ([`utils`]) - Substring search over residue strings

pub mod io;
pub mod ladderon;
pub mod models;
pub mod utils;
