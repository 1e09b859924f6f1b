use crate::core::models::sequence::{Sequence, SequenceError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid sequence on line {line}: {source}")]
    Parse { line: usize, source: SequenceError },

    #[error("FASTA record '{header}' on line {line} has no sequence")]
    EmptyRecord { header: String, line: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV input has no '{0}' column")]
    MissingColumn(String),
}

/// Defines the interface for reading and writing peptide sequence files.
///
/// Readers return sequences in file order without deduplication; building a
/// [`Pool`](crate::core::models::sequence::Pool) from them is left to the caller.
pub trait SequenceFile {
    /// Reads every sequence from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a record is malformed or an I/O operation fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Sequence>, SequenceFileError>;

    /// Writes a batch of sequences belonging to one generation.
    ///
    /// `generation` is used by formats that label their records.
    fn write_to(
        sequences: &[Sequence],
        generation: usize,
        writer: &mut impl Write,
    ) -> Result<(), SequenceFileError>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, SequenceFileError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(
        sequences: &[Sequence],
        generation: usize,
        path: P,
    ) -> Result<(), SequenceFileError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(sequences, generation, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
