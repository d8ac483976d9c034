use crate::diagnostic::{Diagnostics, Position, Scan};
use crate::scanner::cursor::{Cursor, EOF};
use crate::scanner::escape::decode_escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Char,
    String,
}

impl Quote {
    pub fn delimiter(self) -> char {
        match self {
            Self::Char => '\'',
            Self::String => '"',
        }
    }
}

/// Decoded contents of a quoted literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
    /// Source offset where each decoded character was written.
    pub offsets: Vec<usize>,
}

impl Literal {
    fn push(&mut self, c: char, offset: usize) {
        self.value.push(c);
        self.offsets.push(offset);
    }

    pub fn char_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Scan the literal whose opening quote sits at `*index`, leaving `*index`
/// just past the closing quote.
pub fn scan_literal(
    cursor: &Cursor<'_>,
    index: &mut usize,
    quote: Quote,
    diags: &mut Diagnostics,
) -> Scan<Literal> {
    let begin = *index;
    let closing = quote.delimiter();
    let mut literal = Literal::default();
    *index += 1;

    loop {
        match cursor.at(*index) {
            c if c == closing => break,
            EOF => {
                return Err(diags.fatal(
                    "unexpected EOF",
                    Position::new(begin, *index - begin + 1, *index - begin),
                ));
            }
            '\\' => {
                let at = *index;
                if let Some(c) = decode_escape(cursor, index, diags)? {
                    literal.push(c, at);
                }
            }
            _ => {
                let c = cursor.char_at(*index);
                literal.push(c, *index);
                *index += c.len_utf8();
            }
        }
    }
    *index += 1;

    Ok(literal)
}
