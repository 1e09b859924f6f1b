use crate::core::ladderon::corpus::LadderonCorpusModel;
use crate::core::models::sequence::{Pool, Sequence};
use crate::engine::address::AddressIndex;
use crate::engine::assembler::SequenceAssembler;
use crate::engine::batch::{Batch, PoolBatchGenerator};
use crate::engine::book::PoolBook;
use crate::engine::catalog::WeightedCatalog;
use crate::engine::config::{GenerationConfig, LadderonSizeLimit};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rand::Rng;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub batch: Batch,
    /// Resolved ladderon size cap, if one was configured.
    pub size_cap: Option<usize>,
    pub catalog_size: usize,
}

/// Decomposes `pool` once and builds the pool book for this generation.
#[instrument(skip_all, name = "pool_book", fields(pool_size = pool.len()))]
pub fn build_pool_book(
    pool: &Pool,
    model: &impl LadderonCorpusModel,
    size_limit: Option<LadderonSizeLimit>,
) -> Result<PoolBook, EngineError> {
    let peptide_length = pool.peptide_length();
    let size_cap = size_limit.map(|limit| limit.resolve(peptide_length));

    let decomposition = model.decompose(pool)?;
    let index = AddressIndex::build(pool, &decomposition, size_cap);
    let catalog = WeightedCatalog::build(&decomposition, size_cap);

    PoolBook::new(peptide_length, catalog, index)
}

/// Runs one generation step: decomposition, pool book, then a batch of new
/// candidates.
#[instrument(skip_all, name = "generation_workflow")]
pub fn run(
    pool: &Pool,
    model: &impl LadderonCorpusModel,
    config: &GenerationConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<GenerationResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Indexing ladderons",
    });
    info!(
        "Building pool book from {} sequence(s) of length {}.",
        pool.len(),
        pool.peptide_length()
    );
    let book = build_pool_book(pool, model, config.size_limit)?;
    let size_cap = config
        .size_limit
        .map(|limit| limit.resolve(pool.peptide_length()));
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Assembling candidates",
    });
    let assembler = SequenceAssembler::new(&book, config.max_attempts);
    let generator = PoolBatchGenerator::new(assembler, reporter);
    let batch = generator.generate(pool, config.num_candidates, config.no_repetition, rng)?;
    reporter.report(Progress::PhaseFinish);

    Ok(GenerationResult {
        catalog_size: book.catalog().len(),
        size_cap,
        batch,
    })
}

/// Extends `pool` with externally selected survivors that it does not already
/// hold, returning how many were added.
pub fn absorb(
    pool: &mut Pool,
    selected: impl IntoIterator<Item = Sequence>,
) -> Result<usize, EngineError> {
    let added = pool.extend_unique(selected)?;
    info!(
        "Absorbed {} new sequence(s); pool now holds {}.",
        added,
        pool.len()
    );
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ladderon::corpus::LadderonDecomposition;
    use crate::core::ladderon::precomputed::PrecomputedCorpus;
    use crate::core::models::ladderon::{Ladderon, LadderonCount};
    use crate::engine::config::GenerationConfigBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn count(text: &str, multiplicity: u32) -> LadderonCount {
        LadderonCount::new(Ladderon::new(text).unwrap(), multiplicity)
    }

    fn corpus() -> PrecomputedCorpus {
        PrecomputedCorpus::new(
            LadderonDecomposition::from_groups(vec![
                vec![count("A", 6), count("B", 1)],
                vec![count("AA", 2)],
                vec![count("AABA", 1)],
            ])
            .unwrap(),
        )
    }

    #[test]
    fn build_pool_book_applies_fractional_size_limit() {
        let pool = Pool::from_strs(&["AAAA", "AABA"]).unwrap();
        let book =
            build_pool_book(&pool, &corpus(), Some(LadderonSizeLimit::Fraction(0.5))).unwrap();

        assert_eq!(book.peptide_length(), 4);
        assert!(book.catalog().ladderons().iter().all(|l| l.len() <= 2));
        assert!(!book.index().contains("AABA"));
        assert!(book.index().contains("AA"));
    }

    #[test]
    fn run_single_candidate_without_filter() {
        let pool = Pool::from_strs(&["AAAA", "AABA"]).unwrap();
        let config = GenerationConfigBuilder::new()
            .num_candidates(1)
            .no_repetition(false)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(12);

        let result = run(&pool, &corpus(), &config, &mut rng, &ProgressReporter::new()).unwrap();
        assert_eq!(result.batch.len(), 1);
        let sequence = &result.batch.sequences[0];
        assert_eq!(sequence.len(), 4);
        assert!(sequence.as_bytes().iter().all(|&b| b == b'A' || b == b'B'));
        assert_eq!(result.size_cap, None);
        assert_eq!(result.catalog_size, 4);
    }

    #[test]
    fn run_reports_both_phases() {
        use std::sync::{Arc, Mutex};

        let pool = Pool::from_strs(&["AAAA", "AABA"]).unwrap();
        let config = GenerationConfigBuilder::new()
            .num_candidates(2)
            .build()
            .unwrap();
        let phases = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&phases);
        let reporter = ProgressReporter::with_callback(Box::new(move |event: Progress| {
            if let Progress::PhaseStart { name } = event {
                sink.lock().unwrap().push(name);
            }
        }));
        let mut rng = StdRng::seed_from_u64(12);

        run(&pool, &corpus(), &config, &mut rng, &reporter).unwrap();
        assert_eq!(
            *phases.lock().unwrap(),
            vec!["Indexing ladderons", "Assembling candidates"]
        );
    }

    #[test]
    fn run_propagates_corpus_errors() {
        let pool = Pool::from_strs(&["AAA"]).unwrap();
        let config = GenerationConfigBuilder::new()
            .num_candidates(1)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        // "AABA" does not fit a length-3 peptide.
        let result = run(&pool, &corpus(), &config, &mut rng, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Corpus { .. })));
    }

    #[test]
    fn absorb_adds_only_unseen_survivors() {
        let mut pool = Pool::from_strs(&["AAAA", "AABA"]).unwrap();
        let selected = vec![
            Sequence::new("AABA").unwrap(),
            Sequence::new("ABAA").unwrap(),
        ];
        assert_eq!(absorb(&mut pool, selected).unwrap(), 1);
        assert_eq!(pool.len(), 3);
        assert!(pool.contains_str("ABAA"));
    }

    #[test]
    fn absorb_rejects_wrong_length_survivors() {
        let mut pool = Pool::from_strs(&["AAAA"]).unwrap();
        let result = absorb(&mut pool, vec![Sequence::new("AAA").unwrap()]);
        assert!(matches!(result, Err(EngineError::Sequence { .. })));
    }
}
