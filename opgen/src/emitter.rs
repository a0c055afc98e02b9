use crate::constants::lookup;
use crate::error::GenerateError;
use crate::types::{OpcodeEntry, Operand, Record};
use std::io::Write;

/// Writes one table row per record, in the order the records arrive.
pub struct RowEmitter<W: Write> {
    writer: W,
    rows: usize,
    samples: bool,
}

impl<W: Write> RowEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: 0,
            samples: false,
        }
    }

    /// Appends the disassembly of a sample operand to every row as a comment.
    pub fn with_samples(self) -> Self {
        Self {
            samples: true,
            ..self
        }
    }

    pub fn emit(&mut self, record: &Record) -> Result<(), GenerateError> {
        let mode = lookup(&record.mode).map_err(|source| GenerateError::UnknownAddressingMode {
            line: record.line,
            source,
        })?;
        let entry = OpcodeEntry::new(record, mode);

        let mut row = entry.to_string();
        if self.samples {
            let sample = entry.disassemble(Operand::sample(mode.bytes))?;
            row.push_str(&format!(" // {sample}"));
        }
        writeln!(self.writer, "{row}")?;
        // rows written before an abort must reach the output
        self.writer.flush()?;
        self.rows += 1;

        tracing::debug!(line = record.line, mnemonic = %record.mnemonic, mode = %mode.tag, "emitted row");
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
