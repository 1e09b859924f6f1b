use super::corpus::{CorpusError, LadderonCorpusModel, LadderonDecomposition};
use crate::core::models::ladderon::{Ladderon, LadderonCount};
use crate::core::models::sequence::Pool;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LadderonRecord {
    text: String,
    multiplicity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupRecord {
    ladderons: Vec<LadderonRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LadderonBookFile {
    groups: Vec<GroupRecord>,
}

/// A decomposition computed ahead of time by the external ladderon tool.
///
/// The file lists the ranked groups from the base level upward:
///
/// ```toml
/// [[groups]]
/// ladderons = [{ text = "A", multiplicity = 5 }, { text = "B", multiplicity = 1 }]
///
/// [[groups]]
/// ladderons = [{ text = "AA", multiplicity = 2 }]
/// ```
#[derive(Debug, Clone)]
pub struct PrecomputedCorpus {
    decomposition: LadderonDecomposition,
}

impl PrecomputedCorpus {
    pub fn new(decomposition: LadderonDecomposition) -> Self {
        Self { decomposition }
    }

    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        debug!("Loading ladderon book from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn parse(content: &str, origin: &str) -> Result<Self, CorpusError> {
        let file: LadderonBookFile = toml::from_str(content).map_err(|e| CorpusError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let groups = file
            .groups
            .into_iter()
            .map(|group| {
                group
                    .ladderons
                    .into_iter()
                    .map(|record| {
                        Ladderon::new(&record.text)
                            .map(|ladderon| LadderonCount::new(ladderon, record.multiplicity))
                            .map_err(|source| CorpusError::InvalidLadderon {
                                text: record.text,
                                source,
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let decomposition = LadderonDecomposition::from_groups(groups)?;
        debug!(
            "Parsed {} ladderon group(s) with {} composite ladderon(s).",
            decomposition.groups().len(),
            decomposition.book().len()
        );
        Ok(Self { decomposition })
    }

    pub fn decomposition(&self) -> &LadderonDecomposition {
        &self.decomposition
    }
}

impl LadderonCorpusModel for PrecomputedCorpus {
    fn decompose(&self, pool: &Pool) -> Result<LadderonDecomposition, CorpusError> {
        self.decomposition.validate_for_length(pool.peptide_length())?;
        Ok(self.decomposition.clone())
    }
}
