use crate::core::models::ladderon::{Ladderon, LadderonCount};
use crate::core::models::sequence::{Pool, SequenceError};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid ladderon '{text}': {source}")]
    InvalidLadderon {
        text: String,
        source: SequenceError,
    },
    #[error("Decomposition has no base level of atomic units")]
    MissingBaseLevel,
    #[error("Base level entry '{0}' is not a single residue")]
    NonAtomicBaseUnit(String),
    #[error("Ladderon '{ladderon}' is longer than the peptide length {peptide_length}")]
    LadderonTooLong {
        ladderon: String,
        peptide_length: usize,
    },
}

/// Output of a ladderon decomposition of one pool.
///
/// `groups` is ranked from the base level upward: `groups[0]` holds the
/// atomic single-residue units, every later group holds composite ladderons.
/// `book` maps each composite ladderon to its multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderonDecomposition {
    book: HashMap<Ladderon, u32>,
    groups: Vec<Vec<LadderonCount>>,
}

impl LadderonDecomposition {
    /// Builds a decomposition from ranked groups, deriving the book from every
    /// group above the base level.
    pub fn from_groups(groups: Vec<Vec<LadderonCount>>) -> Result<Self, CorpusError> {
        let base = groups.first().ok_or(CorpusError::MissingBaseLevel)?;
        if let Some(unit) = base.iter().find(|unit| !unit.ladderon.is_atomic()) {
            return Err(CorpusError::NonAtomicBaseUnit(unit.ladderon.to_string()));
        }

        let book = groups
            .iter()
            .skip(1)
            .flatten()
            .map(|count| (count.ladderon.clone(), count.multiplicity))
            .collect();

        Ok(Self { book, groups })
    }

    pub fn book(&self) -> &HashMap<Ladderon, u32> {
        &self.book
    }

    pub fn groups(&self) -> &[Vec<LadderonCount>] {
        &self.groups
    }

    pub fn base_units(&self) -> &[LadderonCount] {
        self.groups.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn multiplicity(&self, ladderon: &str) -> Option<u32> {
        self.book.get(ladderon).copied().or_else(|| {
            self.base_units()
                .iter()
                .find(|unit| unit.ladderon.as_str() == ladderon)
                .map(|unit| unit.multiplicity)
        })
    }

    /// Checks that no ladderon is longer than `peptide_length`.
    pub fn validate_for_length(&self, peptide_length: usize) -> Result<(), CorpusError> {
        match self
            .groups
            .iter()
            .flatten()
            .find(|count| count.ladderon.len() > peptide_length)
        {
            Some(count) => Err(CorpusError::LadderonTooLong {
                ladderon: count.ladderon.to_string(),
                peptide_length,
            }),
            None => Ok(()),
        }
    }
}

/// A model that decomposes a pool into reusable substrings.
///
/// The decomposition algorithm lives outside this crate; implementors adapt
/// whatever produces the statistics to this contract. A model is consulted
/// once per generation step.
pub trait LadderonCorpusModel {
    fn decompose(&self, pool: &Pool) -> Result<LadderonDecomposition, CorpusError>;
}

impl<M: LadderonCorpusModel + ?Sized> LadderonCorpusModel for &M {
    fn decompose(&self, pool: &Pool) -> Result<LadderonDecomposition, CorpusError> {
        (**self).decompose(pool)
    }
}
