use super::sequence::{Sequence, SequenceError};
use std::borrow::Borrow;
use std::fmt;

/// A reusable substring of the pool, identified by its residue content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ladderon(String);

impl Ladderon {
    pub fn new(text: &str) -> Result<Self, SequenceError> {
        Sequence::new(text).map(|s| Self(s.into_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Single-residue ladderons are the atomic units of the decomposition.
    pub fn is_atomic(&self) -> bool {
        self.0.len() == 1
    }
}

impl fmt::Display for Ladderon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Ladderon {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A ladderon together with the number of times the corpus model judged it reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LadderonCount {
    pub ladderon: Ladderon,
    pub multiplicity: u32,
}

impl LadderonCount {
    pub fn new(ladderon: Ladderon, multiplicity: u32) -> Self {
        Self {
            ladderon,
            multiplicity,
        }
    }

    /// Selection weight: multiplicity times length.
    pub fn weight(&self) -> u64 {
        u64::from(self.multiplicity) * self.ladderon.len() as u64
    }
}
