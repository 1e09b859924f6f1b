use pephire::core::ladderon::corpus::{CorpusError, LadderonCorpusModel, LadderonDecomposition};
use pephire::core::models::ladderon::{Ladderon, LadderonCount};
use pephire::core::models::sequence::Pool;
use std::collections::BTreeMap;

/// Counts residues as the base level and every substring of `2..=max_len`
/// residues seen at least `min_count` times as one group per length.
pub struct SubstringCorpus {
    pub max_len: usize,
    pub min_count: u32,
}

impl SubstringCorpus {
    pub fn new(max_len: usize, min_count: u32) -> Self {
        Self { max_len, min_count }
    }
}

impl LadderonCorpusModel for SubstringCorpus {
    fn decompose(&self, pool: &Pool) -> Result<LadderonDecomposition, CorpusError> {
        let mut groups = Vec::new();
        for len in 1..=self.max_len.min(pool.peptide_length()) {
            let mut counts: BTreeMap<&[u8], u32> = BTreeMap::new();
            for sequence in pool {
                for window in sequence.as_bytes().windows(len) {
                    *counts.entry(window).or_default() += 1;
                }
            }

            let mut group = Vec::new();
            for (window, multiplicity) in counts {
                if len > 1 && multiplicity < self.min_count {
                    continue;
                }
                let text = String::from_utf8_lossy(window).into_owned();
                let ladderon = Ladderon::new(&text)
                    .map_err(|source| CorpusError::InvalidLadderon { text, source })?;
                group.push(LadderonCount::new(ladderon, multiplicity));
            }
            groups.push(group);
        }
        LadderonDecomposition::from_groups(groups)
    }
}
