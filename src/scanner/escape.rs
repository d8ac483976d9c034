use crate::diagnostic::{Diagnostics, Position, Scan};
use crate::scanner::cursor::Cursor;
use crate::scanner::number::{NumeralOrigin, Radix, parse_number};

/// Decode the escape sequence whose backslash sits at `*index`.
///
/// Yields `None` for the empty escape `\;`, which contributes no character.
/// `*index` is moved past the sequence on every path, including failures.
///
/// Named escapes: `\\ \' \" \a \b \e \f \n \r \t \v`. Numeric escapes:
/// `\NNN` and `\dNNN` (decimal), `\iNNN` (binary), `\oNNN` (octal) and
/// `\xNNN` (hexadecimal). Values above 255 are truncated to a byte with a
/// warning.
pub fn decode_escape(
    cursor: &Cursor<'_>,
    index: &mut usize,
    diags: &mut Diagnostics,
) -> Scan<Option<char>> {
    let begin = *index;
    let follow = cursor.at(begin + 1);
    *index = begin + 2;

    let radix = match follow {
        '\\' | '\'' | '"' => return Ok(Some(follow)),
        ';' => return Ok(None),
        'a' => return Ok(Some('\x07')),
        'b' => return Ok(Some('\x08')),
        'e' => return Ok(Some('\x1b')),
        'f' => return Ok(Some('\x0c')),
        'n' => return Ok(Some('\n')),
        'r' => return Ok(Some('\r')),
        't' => return Ok(Some('\t')),
        'v' => return Ok(Some('\x0b')),
        c if c.is_ascii_digit() => Radix::Decimal,
        c => match Radix::from_escape_selector(c) {
            Some(radix) => radix,
            None => return Err(unrecognized(cursor, index, diags, begin)),
        },
    };

    // A bare digit is the first digit of the run, a selector letter is not.
    let digits_from = if follow.is_ascii_digit() {
        begin + 1
    } else {
        begin + 2
    };
    *index = cursor.run_while(digits_from, |c| radix.digit_value(c).is_some());
    if *index == digits_from {
        return Err(diags.fatal(
            format!("expected digits in {radix} escape code"),
            Position::new(begin, *index - begin + 1, *index - begin),
        ));
    }

    let text = cursor.slice(begin, *index);
    let value = parse_number(diags, begin, text, NumeralOrigin::EscapeCode)?;
    if value > 255.0 {
        diags.warn(
            format!("number `{value}` too large for character"),
            Position::new(begin, *index - begin, 0),
        );
    }
    let byte = (value as u32 & 0xff) as u8;
    Ok(Some(char::from(byte)))
}

fn unrecognized(
    cursor: &Cursor<'_>,
    index: &mut usize,
    diags: &mut Diagnostics,
    begin: usize,
) -> crate::diagnostic::Halt {
    if cursor.is_past_end(begin + 1) {
        return diags.fatal("unexpected EOF", Position::new(begin, 2, 1));
    }
    let c = cursor.char_at(begin + 1);
    *index = begin + 1 + c.len_utf8();
    diags.fatal(
        format!("invalid character `{}` in escape code", c.escape_debug()),
        Position::new(begin, 1 + c.len_utf8(), 1),
    )
}
