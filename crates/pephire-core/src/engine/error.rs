use super::config::ConfigError;
use super::utils::sampling::SamplingError;
use crate::core::ladderon::corpus::CorpusError;
use crate::core::models::sequence::SequenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Ladderon decomposition failed: {source}")]
    Corpus {
        #[from]
        source: CorpusError,
    },

    #[error("Ladderon sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Invalid sequence: {source}")]
    Sequence {
        #[from]
        source: SequenceError,
    },

    #[error("Invalid generation configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Ladderon '{ladderon}' is selectable but has no recorded address")]
    MissingAddress { ladderon: String },

    #[error("Assembly gave up after {attempts} attempts with {unfilled} position(s) still unfilled")]
    AssemblyExhausted { attempts: usize, unfilled: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
