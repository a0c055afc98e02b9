//! Generates the 6502 opcode dispatch table from `INS_<opcode>_<mode>` markers.

pub mod constants;
pub mod emitter;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod types;

use constants::ADDRESSING_MODES;
use emitter::RowEmitter;
use error::GenerateError;
use scanner::LineScanner;
use std::io::{BufRead, Write};

/// Streams one table row per instruction definition in `reader` to `writer`.
///
/// Stops at the first malformed line or unknown addressing mode. Rows written
/// up to that point stay written. Returns the number of rows emitted.
pub fn generate<R: BufRead, W: Write>(reader: R, writer: W) -> Result<usize, GenerateError> {
    emit_all(reader, RowEmitter::new(writer))
}

/// Like [`generate`], with each row followed by the disassembly of a sample operand.
pub fn generate_with_samples<R: BufRead, W: Write>(
    reader: R,
    writer: W,
) -> Result<usize, GenerateError> {
    emit_all(reader, RowEmitter::new(writer).with_samples())
}

fn emit_all<R: BufRead, W: Write>(
    reader: R,
    mut emitter: RowEmitter<W>,
) -> Result<usize, GenerateError> {
    for record in LineScanner::new(reader) {
        emitter.emit(&record?)?;
    }
    tracing::info!(rows = emitter.rows(), "opcode table generated");
    Ok(emitter.rows())
}

pub fn write_modes<W: Write>(writer: &mut W) -> std::io::Result<()> {
    for mode in ADDRESSING_MODES.iter() {
        let code = if mode.code.is_empty() { "-" } else { mode.code };
        writeln!(writer, "{code}\t{}\t{}\t{}", mode.tag, mode.bytes, mode.format)?;
    }
    Ok(())
}
