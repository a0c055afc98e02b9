use crate::error::UnknownAddressingMode;
use crate::types::{AddressingMode, ModeTag};
use std::collections::HashMap;

/// Marker token identifying instruction definition lines.
pub const MARKER: &str = "INS";

pub static ADDRESSING_MODES: [AddressingMode; 13] = {
    use ModeTag::*;
    [
        AddressingMode::new("IM", Immediate, 1, "#$%02x"),
        AddressingMode::new("RE", Relative, 1, "$%02x"),
        AddressingMode::new("AC", Accumulator, 0, ""),
        AddressingMode::new("AB", Absolute, 2, "$%04x"),
        AddressingMode::new("ABX", AbsoluteX, 2, "$%04x,X"),
        AddressingMode::new("ABY", AbsoluteY, 2, "$%04x,Y"),
        AddressingMode::new("ZP", ZeroPage, 1, "$%02x"),
        AddressingMode::new("ZPX", ZeroPageX, 1, "$%02x,X"),
        AddressingMode::new("ZPY", ZeroPageY, 1, "$%02x,Y"),
        AddressingMode::new("IN", Indirect, 2, "($%04x)"),
        AddressingMode::new("IX", IndirectX, 1, "($%02x,X)"),
        AddressingMode::new("IY", IndirectY, 1, "($%02x),Y"),
        AddressingMode::new("", Implied, 0, ""),
    ]
};

lazy_static::lazy_static! {
pub static ref CODE_TO_ADDRESSING_MODE: HashMap<&'static str, &'static AddressingMode> = HashMap::from_iter(
    ADDRESSING_MODES.iter().map(|mode| (mode.code, mode))
);
}

pub fn lookup(code: &str) -> Result<&'static AddressingMode, UnknownAddressingMode> {
    CODE_TO_ADDRESSING_MODE
        .get(code)
        .copied()
        .ok_or_else(|| UnknownAddressingMode(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(code: &str) -> Option<(ModeTag, u8, &'static str)> {
        lookup(code).ok().map(|mode| (mode.tag, mode.bytes, mode.format))
    }

    #[test]
    fn catalog_entries() {
        use ModeTag::*;

        assert_eq!(Some((Immediate, 1, "#$%02x")), triple("IM"));
        assert_eq!(Some((Relative, 1, "$%02x")), triple("RE"));
        assert_eq!(Some((Accumulator, 0, "")), triple("AC"));
        assert_eq!(Some((Absolute, 2, "$%04x")), triple("AB"));
        assert_eq!(Some((AbsoluteX, 2, "$%04x,X")), triple("ABX"));
        assert_eq!(Some((AbsoluteY, 2, "$%04x,Y")), triple("ABY"));
        assert_eq!(Some((ZeroPage, 1, "$%02x")), triple("ZP"));
        assert_eq!(Some((ZeroPageX, 1, "$%02x,X")), triple("ZPX"));
        assert_eq!(Some((ZeroPageY, 1, "$%02x,Y")), triple("ZPY"));
        assert_eq!(Some((Indirect, 2, "($%04x)")), triple("IN"));
        assert_eq!(Some((IndirectX, 1, "($%02x,X)")), triple("IX"));
        assert_eq!(Some((IndirectY, 1, "($%02x),Y")), triple("IY"));
        assert_eq!(Some((Implied, 0, "")), triple(""));
    }

    #[test]
    fn codes_are_unique() {
        assert_eq!(ADDRESSING_MODES.len(), CODE_TO_ADDRESSING_MODE.len());
        for mode in ADDRESSING_MODES.iter() {
            assert_eq!(Ok(mode), lookup(mode.code));
        }
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(Err(UnknownAddressingMode("XX".into())), lookup("XX"));
        assert!(lookup("im").is_err());
        assert!(lookup(" ").is_err());
    }
}
