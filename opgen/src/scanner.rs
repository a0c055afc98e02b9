use crate::constants::MARKER;
use crate::error::GenerateError;
use crate::parser::fields;
use crate::types::Record;
use std::io::{BufRead, ErrorKind, Lines};
use std::iter::Enumerate;

/// Single pass over the input, yielding one record per instruction definition line.
pub struct LineScanner<R> {
    lines: Enumerate<Lines<R>>,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines().enumerate(),
        }
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = Result<Record, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (i, line) in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(error) if error.kind() == ErrorKind::InvalidData => {
                    return Some(Err(GenerateError::MalformedLine {
                        line: i + 1,
                        text: String::from("<invalid UTF-8>"),
                    }))
                }
                Err(error) => return Some(Err(error.into())),
            };
            if !line.contains(MARKER) {
                continue;
            }

            let record = match fields(&line) {
                Ok((_, fields)) => Ok(Record {
                    line: i + 1,
                    mnemonic: fields.mnemonic.to_string(),
                    opcode: fields.opcode.to_string(),
                    mode: fields.mode.to_string(),
                }),
                Err(error) => {
                    tracing::debug!(line = i + 1, %error, "could not split instruction definition");
                    Err(GenerateError::MalformedLine {
                        line: i + 1,
                        text: line.clone(),
                    })
                }
            };
            return Some(record);
        }
        None
    }
}
