use super::error::EngineError;
use super::utils::sampling::sample_offset;
use crate::core::ladderon::corpus::LadderonDecomposition;
use crate::core::models::ladderon::Ladderon;
use crate::core::models::sequence::Pool;
use crate::core::utils::search::find_all;
use rand::Rng;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument};

/// Start offsets at which each ladderon occurs somewhere in the pool.
///
/// Every recorded offset `o` of a ladderon `l` satisfies
/// `o + l.len() <= peptide_length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressIndex {
    peptide_length: usize,
    addresses: HashMap<Ladderon, BTreeSet<usize>>,
}

impl AddressIndex {
    /// Indexes the decomposition's book (ladderons longer than `size_cap`
    /// excluded) and its atomic base units (never excluded) against `pool`.
    #[instrument(level = "debug", skip_all, fields(pool_size = pool.len(), size_cap = ?size_cap))]
    pub fn build(
        pool: &Pool,
        decomposition: &LadderonDecomposition,
        size_cap: Option<usize>,
    ) -> Self {
        let peptide_length = pool.peptide_length();
        let mut addresses: HashMap<Ladderon, BTreeSet<usize>> = HashMap::new();

        let composite = decomposition
            .book()
            .keys()
            .filter(|ladderon| size_cap.is_none_or(|cap| ladderon.len() <= cap));
        let atomic = decomposition.base_units().iter().map(|unit| &unit.ladderon);

        for ladderon in composite.chain(atomic) {
            if addresses.contains_key(ladderon) {
                continue;
            }
            let offsets = locate(pool, ladderon);
            if offsets.is_empty() {
                debug!("Ladderon '{}' does not occur in the pool.", ladderon);
            }
            addresses.insert(ladderon.clone(), offsets);
        }

        debug!(
            "Indexed {} ladderon(s) over {} sequence(s) of length {}.",
            addresses.len(),
            pool.len(),
            peptide_length
        );

        Self {
            peptide_length,
            addresses,
        }
    }

    pub fn peptide_length(&self) -> usize {
        self.peptide_length
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn get(&self, ladderon: &str) -> Option<&BTreeSet<usize>> {
        self.addresses.get(ladderon)
    }

    pub fn contains(&self, ladderon: &str) -> bool {
        self.addresses.contains_key(ladderon)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ladderon, &BTreeSet<usize>)> {
        self.addresses.iter()
    }

    /// Draws one recorded offset of `ladderon` uniformly at random.
    ///
    /// An absent or empty entry means the catalog and the index were built
    /// from different inputs.
    pub fn sample_offset(
        &self,
        ladderon: &Ladderon,
        rng: &mut impl Rng,
    ) -> Result<usize, EngineError> {
        self.addresses
            .get(ladderon)
            .and_then(|offsets| sample_offset(offsets, rng))
            .ok_or_else(|| EngineError::MissingAddress {
                ladderon: ladderon.to_string(),
            })
    }
}

fn locate(pool: &Pool, ladderon: &Ladderon) -> BTreeSet<usize> {
    pool.iter()
        .flat_map(|sequence| find_all(sequence.as_bytes(), ladderon.as_bytes()))
        .collect()
}
