use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,

    #[error("Invalid residue code '{code}' at position {position}")]
    InvalidResidue { code: char, position: usize },

    #[error("Sequence '{sequence}' has length {found}, expected {expected}")]
    LengthMismatch {
        sequence: String,
        expected: usize,
        found: usize,
    },

    #[error("Pool must contain at least one sequence")]
    EmptyPool,
}

/// Returns `true` for an IUPAC one-letter amino-acid code (upper-case ASCII letter).
#[inline]
pub fn is_residue_code(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

/// A peptide written as one-letter residue codes.
///
/// Lower-case input is normalized to upper case; any character that is not an
/// ASCII letter is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(raw: &str) -> Result<Self, SequenceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SequenceError::Empty);
        }

        let normalized = trimmed.to_ascii_uppercase();
        if let Some((position, code)) = normalized
            .char_indices()
            .find(|&(_, c)| !c.is_ascii() || !is_residue_code(c as u8))
        {
            return Err(SequenceError::InvalidResidue { code, position });
        }

        Ok(Self(normalized))
    }

    /// Wraps bytes already known to be residue codes (assembler output).
    pub(crate) fn from_residues(residues: Vec<u8>) -> Result<Self, SequenceError> {
        if residues.is_empty() {
            return Err(SequenceError::Empty);
        }
        if let Some(position) = residues.iter().position(|&b| !is_residue_code(b)) {
            return Err(SequenceError::InvalidResidue {
                code: residues[position] as char,
                position,
            });
        }
        // All bytes are ASCII upper-case letters at this point.
        Ok(Self(residues.into_iter().map(char::from).collect()))
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

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Sequence {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An ordered, duplicate-free collection of equal-length peptides.
///
/// The common length is fixed by the first member. The pool only grows by
/// appending, see [`Pool::extend_unique`].
#[derive(Debug, Clone)]
pub struct Pool {
    sequences: Vec<Sequence>,
    members: HashSet<Sequence>,
    peptide_length: usize,
}

impl Pool {
    pub fn new(sequences: impl IntoIterator<Item = Sequence>) -> Result<Self, SequenceError> {
        let mut iter = sequences.into_iter();
        let first = iter.next().ok_or(SequenceError::EmptyPool)?;

        let mut pool = Self {
            peptide_length: first.len(),
            members: HashSet::from([first.clone()]),
            sequences: vec![first],
        };

        for sequence in iter {
            pool.check_length(&sequence)?;
            if pool.members.contains(&sequence) {
                warn!("Dropping duplicate pool member '{}'.", sequence);
                continue;
            }
            pool.members.insert(sequence.clone());
            pool.sequences.push(sequence);
        }

        Ok(pool)
    }

    pub fn from_strs<S: AsRef<str>>(raw: &[S]) -> Result<Self, SequenceError> {
        let sequences = raw
            .iter()
            .map(|s| Sequence::new(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sequences)
    }

    /// The fixed length `L` shared by every member.
    pub fn peptide_length(&self) -> usize {
        self.peptide_length
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.members.contains(sequence)
    }

    pub fn contains_str(&self, sequence: &str) -> bool {
        self.members.contains(sequence)
    }

    /// Appends every sequence not yet in the pool, preserving input order.
    ///
    /// Returns the number of sequences added. Fails without modifying the
    /// pool if any candidate has the wrong length.
    pub fn extend_unique(
        &mut self,
        candidates: impl IntoIterator<Item = Sequence>,
    ) -> Result<usize, SequenceError> {
        let candidates: Vec<Sequence> = candidates.into_iter().collect();
        for candidate in &candidates {
            self.check_length(candidate)?;
        }

        let before = self.sequences.len();
        for candidate in candidates {
            if self.members.insert(candidate.clone()) {
                self.sequences.push(candidate);
            }
        }
        Ok(self.sequences.len() - before)
    }

    fn check_length(&self, sequence: &Sequence) -> Result<(), SequenceError> {
        if sequence.len() != self.peptide_length {
            return Err(SequenceError::LengthMismatch {
                sequence: sequence.to_string(),
                expected: self.peptide_length,
                found: sequence.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}
