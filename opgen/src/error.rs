#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
#[error("unknown addressing mode {0:?}")]
pub struct UnknownAddressingMode(pub String);

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("line {line}: {source}")]
    UnknownAddressingMode {
        line: usize,
        source: UnknownAddressingMode,
    },
    #[error("line {line}: malformed instruction definition {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error("operand is {found} bytes wide but the addressing mode takes {expected}")]
    OperandWidth { expected: u8, found: u8 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
