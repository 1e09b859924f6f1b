use super::address::AddressIndex;
use super::catalog::WeightedCatalog;
use super::error::EngineError;
use super::utils::sampling::WeightedSampler;
use crate::core::models::ladderon::Ladderon;
use rand::Rng;

/// Everything one generation step needs to assemble candidates: the peptide
/// length, the weighted catalog and the address index built from the same
/// decomposition and pool.
#[derive(Debug, Clone)]
pub struct PoolBook {
    peptide_length: usize,
    catalog: WeightedCatalog,
    index: AddressIndex,
    sampler: WeightedSampler,
}

impl PoolBook {
    /// Pairs a catalog with its index.
    ///
    /// Fails if the catalog cannot be sampled, if the index was built for a
    /// different length, or if any drawable ladderon has no address.
    pub fn new(
        peptide_length: usize,
        catalog: WeightedCatalog,
        index: AddressIndex,
    ) -> Result<Self, EngineError> {
        if index.peptide_length() != peptide_length {
            return Err(EngineError::Internal(format!(
                "address index was built for length {}, pool book expects {}",
                index.peptide_length(),
                peptide_length
            )));
        }

        if let Some((ladderon, _)) = catalog.iter().find(|&(ladderon, weight)| {
            weight > 0 && index.get(ladderon.as_str()).is_none_or(|offsets| offsets.is_empty())
        }) {
            return Err(EngineError::MissingAddress {
                ladderon: ladderon.to_string(),
            });
        }

        let sampler = WeightedSampler::new(catalog.weights())?;
        Ok(Self {
            peptide_length,
            catalog,
            index,
            sampler,
        })
    }

    pub fn peptide_length(&self) -> usize {
        self.peptide_length
    }

    pub fn catalog(&self) -> &WeightedCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &AddressIndex {
        &self.index
    }

    /// Draws a ladderon with probability proportional to its catalog weight.
    pub fn sample_ladderon(&self, rng: &mut impl Rng) -> Result<&Ladderon, EngineError> {
        let position = self.sampler.sample(rng);
        self.catalog.get(position).map(|(ladderon, _)| ladderon).ok_or_else(|| {
            EngineError::Internal(format!("sampled catalog position {} out of range", position))
        })
    }
}
