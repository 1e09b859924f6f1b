use super::traits::{SequenceFile, SequenceFileError};
use crate::core::models::sequence::Sequence;
use std::io::{BufRead, Write};

/// FASTA records; multi-line sequences are concatenated.
///
/// Written records are labelled `peptide{generation}_{index}`, the naming the
/// structure-prediction stage keys its output files on.
pub struct FastaFile;

struct PendingRecord {
    header: String,
    line: usize,
    residues: String,
}

impl PendingRecord {
    fn finish(self) -> Result<Sequence, SequenceFileError> {
        if self.residues.is_empty() {
            return Err(SequenceFileError::EmptyRecord {
                header: self.header,
                line: self.line,
            });
        }
        Sequence::new(&self.residues).map_err(|source| SequenceFileError::Parse {
            line: self.line,
            source,
        })
    }
}

impl SequenceFile for FastaFile {
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Sequence>, SequenceFileError> {
        let mut sequences = Vec::new();
        let mut pending: Option<PendingRecord> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('>') {
                if let Some(record) = pending.take() {
                    sequences.push(record.finish()?);
                }
                pending = Some(PendingRecord {
                    header: header.trim().to_string(),
                    line: index + 1,
                    residues: String::new(),
                });
                continue;
            }

            match pending.as_mut() {
                Some(record) => record.residues.push_str(trimmed),
                // Sequence lines before the first header form an anonymous record.
                None => {
                    pending = Some(PendingRecord {
                        header: String::new(),
                        line: index + 1,
                        residues: trimmed.to_string(),
                    })
                }
            }
        }

        if let Some(record) = pending {
            sequences.push(record.finish()?);
        }
        Ok(sequences)
    }

    fn write_to(
        sequences: &[Sequence],
        generation: usize,
        writer: &mut impl Write,
    ) -> Result<(), SequenceFileError> {
        for (index, sequence) in sequences.iter().enumerate() {
            writeln!(writer, ">peptide{}_{}", generation, index)?;
            writeln!(writer, "{}", sequence)?;
        }
        Ok(())
    }
}
