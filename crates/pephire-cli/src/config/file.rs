use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileGenerationConfig {
    pub num_candidates: Option<usize>,
    pub no_repetition: Option<bool>,
    /// Fraction of the peptide length, in (0, 1].
    pub limit_size: Option<f64>,
    pub max_ladderon_len: Option<usize>,
    pub max_attempts: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub generation: Option<FileGenerationConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_kebab_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pephire.toml");
        fs::write(
            &path,
            r#"
            [generation]
            num-candidates = 20
            no-repetition = false
            limit-size = 0.5
            max-attempts = 2000
            seed = 42
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let generation = config.generation.unwrap();
        assert_eq!(generation.num_candidates, Some(20));
        assert_eq!(generation.no_repetition, Some(false));
        assert_eq!(generation.limit_size, Some(0.5));
        assert_eq!(generation.max_ladderon_len, None);
        assert_eq!(generation.max_attempts, Some(2000));
        assert_eq!(generation.seed, Some(42));
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pephire.toml");
        fs::write(&path, "[generation]\nnum-peptides = 3\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn from_file_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
