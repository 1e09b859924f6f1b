pub mod absorb;
pub mod generate;
pub mod inspect;

use crate::error::{CliError, Result};
use pephire::core::io::format::SequenceFormat;
use pephire::core::io::tabular::CsvFile;
use pephire::core::ladderon::precomputed::PrecomputedCorpus;
use pephire::core::models::sequence::{Pool, Sequence};
use pephire::engine::error::EngineError;
use std::path::Path;
use tracing::info;

/// Reads sequences by file extension. `column` selects the CSV column to read
/// instead of `sequence`.
pub(crate) fn read_sequences(
    path: &Path,
    column: Option<&str>,
) -> Result<Vec<Sequence>> {
    let format = SequenceFormat::from_path(path);
    let sequences = match (format, column) {
        (SequenceFormat::Csv, Some(column)) => CsvFile::read_column_from_path(path, column),
        (_, Some(column)) => {
            return Err(CliError::Argument(format!(
                "Column '{}' was given, but {} is not a CSV file",
                column,
                path.display()
            )));
        }
        (format, None) => format.read_path(path),
    };
    sequences.map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub(crate) fn load_pool(path: &Path, column: Option<&str>) -> Result<Pool> {
    info!("Loading peptide pool from {:?}", path);
    let pool = Pool::new(read_sequences(path, column)?).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!(
        "Pool holds {} peptide(s) of length {}.",
        pool.len(),
        pool.peptide_length()
    );
    Ok(pool)
}

pub(crate) fn load_corpus(path: &Path) -> Result<PrecomputedCorpus> {
    info!("Loading ladderon book from {:?}", path);
    PrecomputedCorpus::load(path).map_err(|e| CliError::Core(EngineError::from(e)))
}

pub(crate) fn write_sequences(
    sequences: &[Sequence],
    format: SequenceFormat,
    generation: usize,
    path: &Path,
) -> Result<()> {
    format
        .write_path(sequences, generation, path)
        .map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
}
