use crate::error::GenerateError;
use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ModeTag {
    Immediate,
    Relative,
    Accumulator,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Indirect,
    IndirectX,
    IndirectY,
    Implied,
}

impl ModeTag {
    /// Name of the addressing mode constant on the emulator side.
    pub fn name(self) -> &'static str {
        match self {
            ModeTag::Immediate => "IMMEDIATE",
            ModeTag::Relative => "RELATIVE",
            ModeTag::Accumulator => "ACCUMULATOR",
            ModeTag::Absolute => "ABSOLUTE",
            ModeTag::AbsoluteX => "ABSOLUTE_X",
            ModeTag::AbsoluteY => "ABSOLUTE_Y",
            ModeTag::ZeroPage => "ZERO_PAGE",
            ModeTag::ZeroPageX => "ZERO_PAGE_X",
            ModeTag::ZeroPageY => "ZERO_PAGE_Y",
            ModeTag::Indirect => "INDIRECT",
            ModeTag::IndirectX => "INDIRECT_X",
            ModeTag::IndirectY => "INDIRECT_Y",
            ModeTag::Implied => "IMPLIED",
        }
    }
}

impl fmt::Display for ModeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct AddressingMode {
    pub code: &'static str,
    pub tag: ModeTag,
    /// Operand bytes following the opcode byte.
    pub bytes: u8,
    /// printf style operand pattern, `%02x` for a byte and `%04x` for a word.
    pub format: &'static str,
}

impl AddressingMode {
    pub const fn new(code: &'static str, tag: ModeTag, bytes: u8, format: &'static str) -> Self {
        Self {
            code,
            tag,
            bytes,
            format,
        }
    }
}

/// One instruction definition line, split into its labeled fields.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Record {
    /// 1-based line number in the input.
    pub line: usize,
    pub mnemonic: String,
    pub opcode: String,
    pub mode: String,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

impl Operand {
    /// A fixed operand of the given width, used for sample disassembly.
    pub fn sample(bytes: u8) -> Self {
        match bytes {
            0 => Operand::None,
            1 => Operand::Byte(0x12),
            _ => Operand::Word(0x1234),
        }
    }

    pub fn width(self) -> u8 {
        match self {
            Operand::None => 0,
            Operand::Byte(_) => 1,
            Operand::Word(_) => 2,
        }
    }
}

/// A record joined with its addressing mode, i.e. one row of the table.
#[derive(PartialEq, Eq, Debug)]
pub struct OpcodeEntry<'a> {
    pub mnemonic: &'a str,
    pub opcode: &'a str,
    pub mode: &'static AddressingMode,
}

impl<'a> OpcodeEntry<'a> {
    pub fn new(record: &'a Record, mode: &'static AddressingMode) -> Self {
        Self {
            mnemonic: &record.mnemonic,
            opcode: &record.opcode,
            mode,
        }
    }

    // The separating space stays even when the format is empty ("EA ").
    pub fn template(&self) -> String {
        format!("{} {}", self.opcode, self.mode.format)
    }

    pub fn handler(&self) -> String {
        format!("op_{}", self.opcode.to_lowercase())
    }

    /// Renders the disassembly text the emulator logs for this opcode.
    pub fn disassemble(&self, operand: Operand) -> Result<String, GenerateError> {
        let template = self.template();
        match (self.mode.bytes, operand) {
            (0, Operand::None) => Ok(template),
            (1, Operand::Byte(byte)) => Ok(template.replacen("%02x", &format!("{byte:02x}"), 1)),
            (2, Operand::Word(word)) => Ok(template.replacen("%04x", &format!("{word:04x}"), 1)),
            (expected, operand) => Err(GenerateError::OperandWidth {
                expected,
                found: operand.width(),
            }),
        }
    }
}

impl fmt::Display for OpcodeEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {{{}, {}, \"{}\", {}}},",
            self.mnemonic,
            self.mode.tag,
            self.mode.bytes,
            self.template(),
            self.handler()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::lookup;

    fn record(mnemonic: &str, opcode: &str, mode: &str) -> Record {
        Record {
            line: 1,
            mnemonic: mnemonic.into(),
            opcode: opcode.into(),
            mode: mode.into(),
        }
    }

    #[test]
    fn entry_fields() {
        let lda = record("LDA", "A9", "IM");
        let entry = OpcodeEntry::new(&lda, lookup("IM").unwrap());
        assert_eq!("A9 #$%02x", entry.template());
        assert_eq!("op_a9", entry.handler());
        assert_eq!("LDA: {IMMEDIATE, 1, \"A9 #$%02x\", op_a9},", entry.to_string());

        let stx = record("STX", "96", "ZPY");
        let entry = OpcodeEntry::new(&stx, lookup("ZPY").unwrap());
        assert_eq!("STX: {ZERO_PAGE_Y, 1, \"96 $%02x,Y\", op_96},", entry.to_string());
    }

    #[test]
    fn implied_template_keeps_trailing_space() {
        let nop = record("NOP", "EA", "");
        let entry = OpcodeEntry::new(&nop, lookup("").unwrap());
        assert_eq!("EA ", entry.template());
        assert_eq!("NOP: {IMPLIED, 0, \"EA \", op_ea},", entry.to_string());
    }

    #[test]
    fn disassembly() {
        let lda = record("LDA", "A9", "IM");
        let entry = OpcodeEntry::new(&lda, lookup("IM").unwrap());
        assert_eq!("A9 #$1e", entry.disassemble(Operand::Byte(0x1E)).unwrap());

        let jmp = record("JMP", "6C", "IN");
        let entry = OpcodeEntry::new(&jmp, lookup("IN").unwrap());
        assert_eq!("6C ($abcd)", entry.disassemble(Operand::Word(0xABCD)).unwrap());

        let sta = record("STA", "9D", "ABX");
        let entry = OpcodeEntry::new(&sta, lookup("ABX").unwrap());
        assert_eq!("9D $0200,X", entry.disassemble(Operand::Word(0x0200)).unwrap());

        let asl = record("ASL", "0A", "AC");
        let entry = OpcodeEntry::new(&asl, lookup("AC").unwrap());
        assert_eq!("0A ", entry.disassemble(Operand::None).unwrap());
    }

    #[test]
    fn disassembly_operand_width_mismatch() {
        let lda = record("LDA", "AD", "AB");
        let entry = OpcodeEntry::new(&lda, lookup("AB").unwrap());
        assert!(matches!(
            entry.disassemble(Operand::Byte(0x12)),
            Err(GenerateError::OperandWidth {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            entry.disassemble(Operand::None),
            Err(GenerateError::OperandWidth {
                expected: 2,
                found: 0
            })
        ));
    }
}
