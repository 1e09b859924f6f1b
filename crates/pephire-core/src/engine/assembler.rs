use super::book::PoolBook;
use super::error::EngineError;
use crate::core::models::sequence::Sequence;
use rand::Rng;
use tracing::trace;

const UNFILLED: u8 = b'-';

/// Fixed-length residue buffer with a parallel mask of filled slots.
#[derive(Debug, Clone)]
pub(crate) struct CandidateBuffer {
    residues: Vec<u8>,
    filled: Vec<bool>,
    unfilled: usize,
}

impl CandidateBuffer {
    pub(crate) fn new(length: usize) -> Self {
        Self {
            residues: vec![UNFILLED; length],
            filled: vec![false; length],
            unfilled: length,
        }
    }

    pub(crate) fn unfilled(&self) -> usize {
        self.unfilled
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.unfilled == 0
    }

    /// Writes `fragment` at `offset` if it covers at least one unfilled slot.
    ///
    /// Already filled slots inside the window are overwritten as well. Returns
    /// the number of newly filled slots; 0 means the buffer is unchanged.
    pub(crate) fn place(&mut self, offset: usize, fragment: &[u8]) -> Result<usize, EngineError> {
        let end = offset + fragment.len();
        if end > self.residues.len() {
            return Err(EngineError::Internal(format!(
                "placement window {}..{} exceeds buffer length {}",
                offset,
                end,
                self.residues.len()
            )));
        }

        let newly_filled = self.filled[offset..end].iter().filter(|&&f| !f).count();
        if newly_filled == 0 {
            return Ok(0);
        }

        self.residues[offset..end].copy_from_slice(fragment);
        self.filled[offset..end].fill(true);
        self.unfilled -= newly_filled;
        Ok(newly_filled)
    }

    pub(crate) fn into_sequence(self) -> Result<Sequence, EngineError> {
        if !self.is_complete() {
            return Err(EngineError::Internal(format!(
                "buffer read out with {} unfilled slot(s)",
                self.unfilled
            )));
        }
        Ok(Sequence::from_residues(self.residues)?)
    }
}

/// Builds one new sequence by weighted random placement of ladderons.
///
/// Each attempt draws a ladderon by catalog weight and one of its recorded
/// offsets uniformly. Placements that cover no unfilled slot are rejected.
/// Assembly fails with [`EngineError::AssemblyExhausted`] once `max_attempts`
/// draws have not completed the buffer.
#[derive(Debug, Clone, Copy)]
pub struct SequenceAssembler<'a> {
    book: &'a PoolBook,
    max_attempts: usize,
}

impl<'a> SequenceAssembler<'a> {
    pub fn new(book: &'a PoolBook, max_attempts: usize) -> Self {
        Self { book, max_attempts }
    }

    pub fn assemble(&self, rng: &mut impl Rng) -> Result<Sequence, EngineError> {
        let mut buffer = CandidateBuffer::new(self.book.peptide_length());
        let mut attempts = 0;

        while !buffer.is_complete() {
            if attempts >= self.max_attempts {
                return Err(EngineError::AssemblyExhausted {
                    attempts,
                    unfilled: buffer.unfilled(),
                });
            }
            attempts += 1;

            let ladderon = self.book.sample_ladderon(rng)?;
            let offset = self.book.index().sample_offset(ladderon, rng)?;
            let newly_filled = buffer.place(offset, ladderon.as_bytes())?;

            if newly_filled == 0 {
                trace!("Rejected '{}' at {}: window already filled.", ladderon, offset);
            } else {
                trace!(
                    "Placed '{}' at {}, {} slot(s) left.",
                    ladderon,
                    offset,
                    buffer.unfilled()
                );
            }
        }

        trace!("Assembly finished after {} attempt(s).", attempts);
        buffer.into_sequence()
    }
}
