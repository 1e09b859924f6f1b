//! Property-based tests for the candidate generator.
//!
//! Pools are random sets of short peptides over a small alphabet, decomposed by
//! a substring-counting model, so every residue of every pool member is
//! reachable at its own position.

mod common;

use common::SubstringCorpus;
use pephire::core::models::sequence::{Pool, Sequence};
use pephire::engine::config::{GenerationConfigBuilder, LadderonSizeLimit};
use pephire::engine::progress::ProgressReporter;
use pephire::workflows::generate;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

const LENGTH: usize = 6;

fn pool_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ACDE]{6}", 1..6)
}

fn generate_batch(
    raw: &[String],
    seed: u64,
    count: usize,
    no_repetition: bool,
    size_limit: Option<LadderonSizeLimit>,
) -> (Pool, Vec<Sequence>) {
    let pool = Pool::from_strs(raw).unwrap();
    let config = GenerationConfigBuilder::new()
        .num_candidates(count)
        .no_repetition(no_repetition)
        .size_limit(size_limit)
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let result = generate::run(
        &pool,
        &SubstringCorpus::new(3, 2),
        &config,
        &mut rng,
        &ProgressReporter::new(),
    )
    .unwrap();
    (pool, result.batch.sequences)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn residues_come_from_the_same_position_in_the_pool(
        raw in pool_strategy(),
        seed in any::<u64>(),
    ) {
        let (pool, batch) = generate_batch(&raw, seed, 10, false, None);

        prop_assert_eq!(batch.len(), 10);
        for sequence in &batch {
            prop_assert_eq!(sequence.len(), LENGTH);
            for (position, residue) in sequence.as_bytes().iter().enumerate() {
                prop_assert!(
                    pool.iter().any(|member| member.as_bytes()[position] == *residue),
                    "residue {} at {} absent from pool column",
                    *residue as char,
                    position
                );
            }
        }
    }

    #[test]
    fn filtered_batches_repeat_neither_themselves_nor_the_pool(
        raw in pool_strategy(),
        seed in any::<u64>(),
        count in 1usize..30,
    ) {
        let (pool, batch) = generate_batch(&raw, seed, count, true, None);

        prop_assert!(batch.len() <= count);
        let unique: HashSet<&Sequence> = batch.iter().collect();
        prop_assert_eq!(unique.len(), batch.len());
        prop_assert!(batch.iter().all(|sequence| !pool.contains(sequence)));
    }

    #[test]
    fn same_seed_gives_the_same_batch(
        raw in pool_strategy(),
        seed in any::<u64>(),
        no_repetition in any::<bool>(),
    ) {
        let (_, first) = generate_batch(&raw, seed, 12, no_repetition, None);
        let (_, second) = generate_batch(&raw, seed, 12, no_repetition, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn size_cap_bounds_catalog_and_index(
        raw in pool_strategy(),
        cap in 1usize..=LENGTH,
    ) {
        let pool = Pool::from_strs(&raw).unwrap();
        let book = generate::build_pool_book(
            &pool,
            &SubstringCorpus::new(LENGTH, 1),
            Some(LadderonSizeLimit::Absolute(cap)),
        )
        .unwrap();

        prop_assert!(book.catalog().iter().all(|(ladderon, _)| ladderon.len() <= cap));
        prop_assert!(book.index().iter().all(|(ladderon, _)| ladderon.len() <= cap));
        for (ladderon, offsets) in book.index().iter() {
            prop_assert!(offsets.iter().all(|offset| offset + ladderon.len() <= LENGTH));
        }
    }
}
