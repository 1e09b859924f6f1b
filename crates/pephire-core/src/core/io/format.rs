use super::fasta::FastaFile;
use super::plain::PlainFile;
use super::tabular::CsvFile;
use super::traits::{SequenceFile, SequenceFileError};
use crate::core::models::sequence::Sequence;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceFormat {
    #[default]
    Plain,
    Fasta,
    Csv,
}

impl SequenceFormat {
    /// Guesses the format from a file extension, falling back to plain text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("fa" | "fasta" | "faa") => Self::Fasta,
            Some("csv") => Self::Csv,
            _ => Self::Plain,
        }
    }

    pub fn read_path(self, path: &Path) -> Result<Vec<Sequence>, SequenceFileError> {
        match self {
            Self::Plain => PlainFile::read_from_path(path),
            Self::Fasta => FastaFile::read_from_path(path),
            Self::Csv => CsvFile::read_from_path(path),
        }
    }

    pub fn write_path(
        self,
        sequences: &[Sequence],
        generation: usize,
        path: &Path,
    ) -> Result<(), SequenceFileError> {
        match self {
            Self::Plain => PlainFile::write_to_path(sequences, generation, path),
            Self::Fasta => FastaFile::write_to_path(sequences, generation, path),
            Self::Csv => CsvFile::write_to_path(sequences, generation, path),
        }
    }

    pub fn write_to(
        self,
        sequences: &[Sequence],
        generation: usize,
        writer: &mut impl std::io::Write,
    ) -> Result<(), SequenceFileError> {
        match self {
            Self::Plain => PlainFile::write_to(sequences, generation, writer),
            Self::Fasta => FastaFile::write_to(sequences, generation, writer),
            Self::Csv => CsvFile::write_to(sequences, generation, writer),
        }
    }
}

impl FromStr for SequenceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "txt" => Ok(Self::Plain),
            "fasta" | "fa" => Ok(Self::Fasta),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "Unknown sequence format '{}'. Expected 'plain', 'fasta' or 'csv'.",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn from_path_uses_extension() {
        assert_eq!(
            SequenceFormat::from_path(&PathBuf::from("pool.FASTA")),
            SequenceFormat::Fasta
        );
        assert_eq!(
            SequenceFormat::from_path(&PathBuf::from("scores.csv")),
            SequenceFormat::Csv
        );
        assert_eq!(
            SequenceFormat::from_path(&PathBuf::from("pool.txt")),
            SequenceFormat::Plain
        );
        assert_eq!(
            SequenceFormat::from_path(&PathBuf::from("pool")),
            SequenceFormat::Plain
        );
    }

    #[test]
    fn from_str_accepts_known_names() {
        assert_eq!("FASTA".parse::<SequenceFormat>(), Ok(SequenceFormat::Fasta));
        assert_eq!("plain".parse::<SequenceFormat>(), Ok(SequenceFormat::Plain));
        assert!("json".parse::<SequenceFormat>().is_err());
    }

    #[test]
    fn write_then_read_path_through_fasta() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batch.fasta");
        let sequences = vec![Sequence::new("AAAB").unwrap(), Sequence::new("BAAA").unwrap()];

        SequenceFormat::Fasta
            .write_path(&sequences, 0, &path)
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(">peptide0_0\nAAAB\n"));

        let read_back = SequenceFormat::from_path(&path).read_path(&path).unwrap();
        assert_eq!(read_back, sequences);
    }

    #[test]
    fn read_path_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = SequenceFormat::Plain.read_path(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(SequenceFileError::Io(_))));
    }
}
