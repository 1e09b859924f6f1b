//! Utility functions for the engine module.
//!
//! Currently this holds the random draws the assembler relies on: weighted
//! selection from the ladderon catalog and uniform selection of an address.

pub mod sampling;
