use crate::diagnostic::{Diagnostics, Position, Scan};
use crate::scanner::cursor::{Cursor, EOF};
use crate::scanner::literal::{Quote, scan_literal};
use crate::scanner::number::{NumeralOrigin, parse_number};
use crate::scanner::token::{Span, Token};

const WHITESPACE: &str = " \t\n\r\x0c\x0b";
const OPERATORS: &str = "~!%^&*-+=[]\\|:<>/?";
const PUNCTUATION: &str = "@$(){};,.";

fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(c)
}

fn is_operator(c: char) -> bool {
    OPERATORS.contains(c)
}

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A numeral's lexical shape, whatever its base turns out to be.
fn is_numeral_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '\''
}

struct Lexer<'src, 'd> {
    cursor: Cursor<'src>,
    index: usize,
    tokens: Vec<Token>,
    diags: &'d mut Diagnostics,
}

impl<'src, 'd> Lexer<'src, 'd> {
    fn new(source: &'src str, diags: &'d mut Diagnostics) -> Self {
        Self {
            cursor: Cursor::new(source),
            index: 0,
            tokens: Vec::new(),
            diags,
        }
    }

    fn run(mut self) -> Scan<Vec<Token>> {
        loop {
            let c = self.cursor.at(self.index);
            match c {
                EOF if self.cursor.is_past_end(self.index) => break,
                c if is_whitespace(c) => {
                    self.index = self.cursor.run_while(self.index, is_whitespace);
                }
                '#' => self.skip_comment(),
                '\'' => self.char_literal()?,
                '"' => self.string_literal()?,
                c if c.is_ascii_digit() => self.number()?,
                c if is_ident_start(c) => self.identifier(),
                c if is_operator(c) => self.operator(),
                c if is_punctuation(c) => self.punctuation(c),
                _ => return Err(self.invalid_character()),
            }
        }
        Ok(self.tokens)
    }

    fn emit(&mut self, token: Token) {
        tracing::trace!(%token, "token");
        self.tokens.push(token);
    }

    fn span_from(&self, begin: usize) -> Span {
        Span::new(begin, self.index.min(self.cursor.len()) - begin)
    }

    /// Skip to the end of the line, newline included.
    fn skip_comment(&mut self) {
        self.index = self.cursor.run_while(self.index + 1, |c| c != '\n') + 1;
    }

    fn char_literal(&mut self) -> Scan<()> {
        let begin = self.index;
        let literal = scan_literal(&self.cursor, &mut self.index, Quote::Char, self.diags)?;
        let length = self.index - begin;

        let mut chars = literal.value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let span = self.span_from(begin);
                self.emit(Token::char_literal(c, span));
                Ok(())
            }
            (None, _) => Err(self
                .diags
                .fatal("char literal cannot be empty", Position::new(begin, length, 1))),
            (Some(_), Some(_)) => {
                let second = literal.offsets.get(1).map_or(1, |offset| offset - begin);
                Err(self.diags.fatal(
                    "too many characters in char literal",
                    Position::new(begin, length, second),
                ))
            }
        }
    }

    fn string_literal(&mut self) -> Scan<()> {
        let begin = self.index;
        let literal = scan_literal(&self.cursor, &mut self.index, Quote::String, self.diags)?;
        let span = self.span_from(begin);
        self.emit(Token::string_literal(literal.value, span));
        Ok(())
    }

    fn number(&mut self) -> Scan<()> {
        let begin = self.index;
        self.index = self.cursor.run_while(begin + 1, is_numeral_continue);
        let text = self.cursor.slice(begin, self.index);
        let value = parse_number(self.diags, begin, text, NumeralOrigin::Literal)?;
        let span = self.span_from(begin);
        self.emit(Token::numeric(value, span));
        Ok(())
    }

    fn identifier(&mut self) {
        let begin = self.index;
        self.index = self.cursor.run_while(begin + 1, is_ident_continue);
        let text = self.cursor.slice(begin, self.index);
        let span = self.span_from(begin);
        self.emit(Token::identifier(text, span));
    }

    fn operator(&mut self) {
        let begin = self.index;
        self.index = self.cursor.run_while(begin + 1, is_operator);
        let text = self.cursor.slice(begin, self.index);
        let span = self.span_from(begin);
        self.emit(Token::operator(text, span));
    }

    fn punctuation(&mut self, c: char) {
        let span = Span::new(self.index, 1);
        self.index += 1;
        self.emit(Token::punctuation(c, span));
    }

    fn invalid_character(&mut self) -> crate::diagnostic::Halt {
        let c = self.cursor.char_at(self.index);
        self.diags.fatal(
            format!("invalid character `{}` in source code", c.escape_debug()),
            Position::new(self.index, c.len_utf8(), 0),
        )
    }
}

/// Split `source` into tokens, recording every message in `diags`.
///
/// Scanning stops at the first error; warnings accumulate without stopping
/// it. On failure `diags` holds exactly one error, the last message.
pub fn tokenize(source: &str, diags: &mut Diagnostics) -> Scan<Vec<Token>> {
    Lexer::new(source, diags).run()
}
