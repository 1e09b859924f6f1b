use rand::{distributions::WeightedIndex, prelude::*};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("Weighted catalog is empty, cannot sample a ladderon")]
    EmptyCatalog,
    #[error("All catalog weights are zero, no ladderon can be selected")]
    ZeroTotalWeight,
    #[error("Failed to create weighted distribution: {source}")]
    DistributionError {
        #[from]
        source: rand::distributions::WeightedError,
    },
}

/// Draws catalog positions with probability proportional to their weight.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    distribution: WeightedIndex<u64>,
}

impl WeightedSampler {
    pub fn new(weights: &[u64]) -> Result<Self, SamplingError> {
        if weights.is_empty() {
            return Err(SamplingError::EmptyCatalog);
        }
        if weights.iter().all(|&w| w == 0) {
            return Err(SamplingError::ZeroTotalWeight);
        }
        let distribution = WeightedIndex::new(weights)?;
        Ok(Self { distribution })
    }

    #[inline]
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        self.distribution.sample(rng)
    }
}

/// Picks one offset uniformly from an address set, or `None` if it is empty.
pub fn sample_offset(offsets: &BTreeSet<usize>, rng: &mut impl Rng) -> Option<usize> {
    if offsets.is_empty() {
        return None;
    }
    let nth = rng.gen_range(0..offsets.len());
    offsets.iter().nth(nth).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn new_rejects_empty_weights() {
        assert!(matches!(
            WeightedSampler::new(&[]),
            Err(SamplingError::EmptyCatalog)
        ));
    }

    #[test]
    fn new_rejects_all_zero_weights() {
        assert!(matches!(
            WeightedSampler::new(&[0, 0, 0]),
            Err(SamplingError::ZeroTotalWeight)
        ));
    }

    #[test]
    fn zero_weight_entries_are_never_drawn() {
        let sampler = WeightedSampler::new(&[0, 5, 0]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_eq!(sampler.sample(&mut rng), 1);
        }
    }

    #[test]
    fn empirical_frequencies_converge_to_weight_share() {
        let weights = [2u64, 6, 12];
        let total: u64 = weights.iter().sum();
        let sampler = WeightedSampler::new(&weights).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let draws = 200_000;
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            counts[sampler.sample(&mut rng)] += 1;
        }

        for (count, weight) in counts.iter().zip(weights) {
            let observed = *count as f64 / draws as f64;
            let expected = weight as f64 / total as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "observed {:.4}, expected {:.4}",
                observed,
                expected
            );
        }
    }

    #[test]
    fn sample_offset_returns_members_only() {
        let offsets: BTreeSet<usize> = [0, 3, 7].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = BTreeSet::new();
        for _ in 0..500 {
            let offset = sample_offset(&offsets, &mut rng).unwrap();
            assert!(offsets.contains(&offset));
            seen.insert(offset);
        }
        assert_eq!(seen, offsets);
    }

    #[test]
    fn sample_offset_returns_none_for_empty_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_offset(&BTreeSet::new(), &mut rng), None);
    }
}
