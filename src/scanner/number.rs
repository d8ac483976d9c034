use crate::diagnostic::{Diagnostics, Position, Scan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Value of `c` as a digit of this radix, ignoring case.
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.base())
    }

    /// Radix named by the letter after a backslash: `\d`, `\i`, `\o`, `\x`.
    pub fn from_escape_selector(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Decimal),
            'i' => Some(Self::Binary),
            'o' => Some(Self::Octal),
            'x' => Some(Self::Hexadecimal),
            _ => None,
        }
    }
}

/// Where a numeral came from. Escape codes take no `.` or `'` and are
/// prefixed by a backslash instead of `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum NumeralOrigin {
    #[strum(serialize = "numerical literal")]
    Literal,
    #[strum(serialize = "escape code")]
    EscapeCode,
}

/// Radix and the byte offset where digits start, from a lowercased numeral.
fn detect_radix(lower: &str, origin: NumeralOrigin) -> (Radix, usize) {
    let lead = match origin {
        NumeralOrigin::Literal => '0',
        NumeralOrigin::EscapeCode => '\\',
    };
    let mut chars = lower.chars();
    if chars.next() != Some(lead) {
        return (Radix::Decimal, 0);
    }
    match (origin, chars.next()) {
        (_, Some('d')) => (Radix::Decimal, 2),
        (NumeralOrigin::Literal, Some('b')) | (NumeralOrigin::EscapeCode, Some('i')) => {
            (Radix::Binary, 2)
        }
        (_, Some('o')) => (Radix::Octal, 2),
        (_, Some('x')) => (Radix::Hexadecimal, 2),
        (NumeralOrigin::Literal, _) => (Radix::Decimal, 0),
        (NumeralOrigin::EscapeCode, _) => (Radix::Decimal, 1),
    }
}

/// Convert a numeral starting at absolute offset `begin` into its value.
///
/// Accepts an optional `0d`/`0b`/`0o`/`0x` prefix, at most one `.` and any
/// number of `'` digit separators. On a malformed numeral exactly one error
/// is recorded, pointing at the offending character.
pub fn parse_number(
    diags: &mut Diagnostics,
    begin: usize,
    text: &str,
    origin: NumeralOrigin,
) -> Scan<f32> {
    let lower = text.to_ascii_lowercase();
    let (radix, start) = detect_radix(&lower, origin);
    let base = radix.base() as f32;

    let mut value = 0.0_f32;
    let mut digits = 0_usize;
    let mut point = None;

    for (i, c) in lower.char_indices().skip_while(|&(i, _)| i < start) {
        if let Some(digit) = radix.digit_value(c) {
            value = value * base + digit as f32;
            digits += 1;
            continue;
        }
        let pos = Position::new(begin, text.len(), i);
        match (origin, c) {
            (NumeralOrigin::Literal, '.') if point.is_none() => point = Some(digits),
            (NumeralOrigin::Literal, '.') => {
                return Err(diags.fatal(
                    format!("multiple decimal points in {radix} {origin}"),
                    pos,
                ));
            }
            (NumeralOrigin::Literal, '\'') => {}
            _ => {
                let shown = text[i..].chars().next().unwrap_or(c);
                return Err(diags.fatal(
                    format!("invalid character `{shown}` in {radix} {origin}"),
                    pos,
                ));
            }
        }
    }

    if let Some(point) = point {
        let fraction_digits = i32::try_from(digits - point).unwrap_or(i32::MAX);
        value /= base.powi(fraction_digits);
    }
    Ok(value)
}
