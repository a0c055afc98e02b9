use crate::constants::MARKER;
use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::sequence::*;

#[derive(PartialEq, Debug)]
pub struct Fields<'a> {
    pub mnemonic: &'a str,
    pub opcode: &'a str,
    pub mode: &'a str,
}

/// Splits an instruction definition such as `LDA INS_A9_IM` into its fields.
///
/// The mnemonic is the first whitespace separated word. The opcode is the
/// alphanumeric segment following the marker. The mode code is everything after
/// the next `_` up to whitespace, unvalidated; no mode segment at all, or an empty
/// one, gives the empty (implied) mode code. Any other character directly after
/// the opcode makes the line malformed.
pub fn fields(input: &str) -> nom::IResult<&str, Fields<'_>> {
    let (_, mnemonic) = mnemonic(input)?;
    let (rest, _) = until_marker(input)?;
    let (rest, (opcode, mode)) = marker_token(rest)?;
    Ok((
        rest,
        Fields {
            mnemonic,
            opcode,
            mode,
        },
    ))
}

fn mnemonic(input: &str) -> nom::IResult<&str, &str> {
    preceded(multispace0, take_till1(|c: char| c.is_whitespace()))(input)
}

fn until_marker(input: &str) -> nom::IResult<&str, &str> {
    take_until(MARKER)(input)
}

fn segment1(input: &str) -> nom::IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric())(input)
}

fn mode(input: &str) -> nom::IResult<&str, &str> {
    alt((
        preceded(char('_'), take_till(|c: char| c.is_whitespace())),
        map(peek(alt((multispace1, eof))), |_| ""),
    ))(input)
}

fn marker_token(input: &str) -> nom::IResult<&str, (&str, &str)> {
    preceded(pair(tag(MARKER), char('_')), pair(segment1, mode))(input)
}
