use crate::core::ladderon::corpus::LadderonDecomposition;
use crate::core::models::ladderon::{Ladderon, LadderonCount};
use tracing::{debug, instrument};

/// Ladderons eligible for placement, aligned with their selection weights.
///
/// Order follows the decomposition's groups from the base level upward, then
/// the order within each group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeightedCatalog {
    ladderons: Vec<Ladderon>,
    weights: Vec<u64>,
}

impl WeightedCatalog {
    /// Builds the catalog with `weight = multiplicity * length`, skipping every
    /// ladderon longer than `size_cap`.
    #[instrument(level = "debug", skip_all, fields(size_cap = ?size_cap))]
    pub fn build(decomposition: &LadderonDecomposition, size_cap: Option<usize>) -> Self {
        let mut catalog = Self::default();
        for count in decomposition.groups().iter().flatten() {
            if size_cap.is_some_and(|cap| count.ladderon.len() > cap) {
                continue;
            }
            catalog.push(count);
        }

        debug!(
            "Catalog holds {} ladderon(s) with total weight {}.",
            catalog.len(),
            catalog.total_weight()
        );
        catalog
    }

    fn push(&mut self, count: &LadderonCount) {
        self.ladderons.push(count.ladderon.clone());
        self.weights.push(count.weight());
    }

    pub fn ladderons(&self) -> &[Ladderon] {
        &self.ladderons
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.ladderons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ladderons.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }

    pub fn get(&self, position: usize) -> Option<(&Ladderon, u64)> {
        self.ladderons
            .get(position)
            .zip(self.weights.get(position).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ladderon, u64)> {
        self.ladderons.iter().zip(self.weights.iter().copied())
    }

    /// Longest ladderon in the catalog, 0 when empty.
    pub fn max_ladderon_len(&self) -> usize {
        self.ladderons.iter().map(Ladderon::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(text: &str, multiplicity: u32) -> LadderonCount {
        LadderonCount::new(Ladderon::new(text).unwrap(), multiplicity)
    }

    fn decomposition() -> LadderonDecomposition {
        LadderonDecomposition::from_groups(vec![
            vec![count("W", 2), count("Q", 3)],
            vec![count("QL", 3)],
            vec![count("RLA", 4), count("AGDEFE", 1)],
        ])
        .unwrap()
    }

    #[test]
    fn build_weights_by_multiplicity_times_length_in_group_order() {
        let catalog = WeightedCatalog::build(&decomposition(), None);
        let entries: Vec<(&str, u64)> = catalog.iter().map(|(l, w)| (l.as_str(), w)).collect();
        assert_eq!(
            entries,
            vec![("W", 2), ("Q", 3), ("QL", 6), ("RLA", 12), ("AGDEFE", 6)]
        );
        assert_eq!(catalog.total_weight(), 29);
        assert_eq!(catalog.max_ladderon_len(), 6);
    }

    #[test]
    fn build_drops_ladderons_above_cap_from_both_lists() {
        let catalog = WeightedCatalog::build(&decomposition(), Some(3));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.weights().len(), catalog.ladderons().len());
        assert!(catalog.ladderons().iter().all(|l| l.len() <= 3));
        assert!(!catalog.ladderons().iter().any(|l| l.as_str() == "AGDEFE"));
    }

    #[test]
    fn build_keeps_zero_multiplicity_entries_with_zero_weight() {
        let decomposition =
            LadderonDecomposition::from_groups(vec![vec![count("A", 0), count("B", 1)]]).unwrap();
        let catalog = WeightedCatalog::build(&decomposition, None);
        assert_eq!(catalog.get(0).map(|(l, w)| (l.as_str(), w)), Some(("A", 0)));
        assert_eq!(catalog.get(2), None);
    }
}
