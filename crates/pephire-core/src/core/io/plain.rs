use super::traits::{SequenceFile, SequenceFileError};
use crate::core::models::sequence::Sequence;
use std::io::{BufRead, Write};

/// One sequence per line; blank lines and `#` comments are skipped.
pub struct PlainFile;

impl SequenceFile for PlainFile {
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Sequence>, SequenceFileError> {
        let mut sequences = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let sequence = Sequence::new(trimmed).map_err(|source| SequenceFileError::Parse {
                line: index + 1,
                source,
            })?;
            sequences.push(sequence);
        }
        Ok(sequences)
    }

    fn write_to(
        sequences: &[Sequence],
        _generation: usize,
        writer: &mut impl Write,
    ) -> Result<(), SequenceFileError> {
        for sequence in sequences {
            writeln!(writer, "{}", sequence)?;
        }
        Ok(())
    }
}
