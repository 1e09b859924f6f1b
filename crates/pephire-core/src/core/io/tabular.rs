use super::traits::{SequenceFile, SequenceFileError};
use crate::core::models::sequence::Sequence;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

pub const SEQUENCE_COLUMN: &str = "sequence";

#[derive(Debug, Serialize)]
struct BatchRecord<'a> {
    generation: usize,
    index: usize,
    sequence: &'a str,
}

/// Tabular batches with `generation,index,sequence` columns.
///
/// Reading accepts any CSV with a header row. [`SequenceFile::read_from`]
/// takes the `sequence` column; [`CsvFile::read_column_from_path`] takes a
/// named one, such as `dockingpool` or `helixpool` in the tables written by
/// the docking and scoring stages.
pub struct CsvFile;

impl CsvFile {
    pub fn read_column_from_path<P: AsRef<Path>>(
        path: P,
        column: &str,
    ) -> Result<Vec<Sequence>, SequenceFileError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_column(&mut reader, column)
    }

    pub fn read_column(
        reader: &mut impl BufRead,
        column: &str,
    ) -> Result<Vec<Sequence>, SequenceFileError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let position = csv_reader
            .headers()?
            .iter()
            .position(|header| header.trim() == column)
            .ok_or_else(|| SequenceFileError::MissingColumn(column.to_string()))?;

        let mut sequences = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let Some(raw) = record.get(position) else {
                continue;
            };
            if raw.trim().is_empty() {
                continue;
            }
            // Header occupies line 1.
            let sequence = Sequence::new(raw).map_err(|source| SequenceFileError::Parse {
                line: index + 2,
                source,
            })?;
            sequences.push(sequence);
        }
        Ok(sequences)
    }
}

impl SequenceFile for CsvFile {
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Sequence>, SequenceFileError> {
        Self::read_column(reader, SEQUENCE_COLUMN)
    }

    fn write_to(
        sequences: &[Sequence],
        generation: usize,
        writer: &mut impl Write,
    ) -> Result<(), SequenceFileError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (index, sequence) in sequences.iter().enumerate() {
            csv_writer.serialize(BatchRecord {
                generation,
                index,
                sequence: sequence.as_str(),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
