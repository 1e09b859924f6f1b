use super::assembler::SequenceAssembler;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::sequence::{Pool, Sequence};
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Candidates produced by one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub sequences: Vec<Sequence>,
    pub requested: usize,
    /// Assembled sequences dropped as repeats of the batch or the pool.
    pub discarded: usize,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn is_short(&self) -> bool {
        self.sequences.len() < self.requested
    }
}

/// Runs the assembler a fixed number of times against an existing pool.
///
/// With `no_repetition` set, a sequence already in the batch or in the pool is
/// dropped and not replaced, so the batch can come back shorter than requested.
pub struct PoolBatchGenerator<'a> {
    assembler: SequenceAssembler<'a>,
    reporter: &'a ProgressReporter<'a>,
}

impl<'a> PoolBatchGenerator<'a> {
    pub fn new(assembler: SequenceAssembler<'a>, reporter: &'a ProgressReporter<'a>) -> Self {
        Self {
            assembler,
            reporter,
        }
    }

    #[instrument(level = "debug", skip_all, fields(count = count, no_repetition = no_repetition))]
    pub fn generate(
        &self,
        pool: &Pool,
        count: usize,
        no_repetition: bool,
        rng: &mut impl Rng,
    ) -> Result<Batch, EngineError> {
        self.reporter.report(Progress::BatchStart {
            requested: count as u64,
        });

        let mut sequences = Vec::with_capacity(count);
        let mut seen: HashSet<Sequence> = HashSet::with_capacity(count);
        let mut discarded = 0;

        for _ in 0..count {
            let candidate = self.assembler.assemble(rng)?;

            let accepted = if !no_repetition {
                true
            } else if pool.contains(&candidate) || seen.contains(&candidate) {
                debug!("Discarding repeated candidate '{}'.", candidate);
                false
            } else {
                true
            };

            if accepted {
                if no_repetition {
                    seen.insert(candidate.clone());
                }
                sequences.push(candidate);
            } else {
                discarded += 1;
            }
            self.reporter
                .report(Progress::CandidateAssembled { accepted });
        }

        self.reporter.report(Progress::BatchFinish {
            accepted: sequences.len(),
            discarded,
        });
        if sequences.len() < count {
            self.reporter.report(Progress::Message(format!(
                "Batch holds {} of {} requested candidate(s); {} repeat(s) were not replaced.",
                sequences.len(),
                count,
                discarded
            )));
        }
        info!(
            "Generated {} of {} requested candidate(s); {} repeat(s) discarded.",
            sequences.len(),
            count,
            discarded
        );

        Ok(Batch {
            sequences,
            requested: count,
            discarded,
        })
    }
}
