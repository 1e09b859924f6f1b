//! # Workflows Module
//!
//! High-level entry points tying the `core` and `engine` layers together.
//!
//! - **Generation Workflow** ([`generate`]) - One outer generation step:
//!   decompose the pool, build the pool book, assemble a batch of new
//!   candidates, and fold externally selected survivors back into the pool.

pub mod generate;
