use crate::models::errors::ParseError;

const SEPARATOR: char = ',';

/// Splits on a literal comma. No trimming; empty text yields `[""]`.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(SEPARATOR).map(str::to_string).collect()
}

/// Case-insensitive `true`/`1` and `false`/`0`.
pub fn parse_bool(text: &str) -> Result<bool, ParseError> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ParseError::Bool {
            value: text.to_string(),
        }),
    }
}

/// Unsigned integer literal with the base taken from its prefix:
/// `0x` hex, `0o` octal, `0b` binary, a bare leading `0` octal, otherwise
/// decimal. `_` may separate digits or follow a prefix.
pub fn parse_uint(text: &str) -> Result<u64, ParseError> {
    let unsigned = || ParseError::Unsigned {
        value: text.to_string(),
    };

    let (radix, digits, prefixed) = split_radix(text);

    if digits.contains(|c: char| c == '+' || c == '-') {
        return Err(unsigned());
    }

    if !digits.contains('_') {
        return Ok(u64::from_str_radix(digits, radix)?);
    }
    if !underscores_ok(digits, prefixed) {
        return Err(unsigned());
    }
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    Ok(u64::from_str_radix(&cleaned, radix)?)
}

fn split_radix(text: &str) -> (u32, &str, bool) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &text[2..], true),
            b'o' | b'O' => return (8, &text[2..], true),
            b'b' | b'B' => return (2, &text[2..], true),
            _ => return (8, &text[1..], true),
        }
    }
    (10, text, false)
}

/// `_` may follow the prefix or sit between two digits, never lead an
/// unprefixed literal or trail.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    (prefixed || !digits.starts_with('_')) && !digits.ends_with('_') && !digits.contains("__")
}
