use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Starts with `0`-`9`; may carry a `0d`/`0b`/`0o`/`0x` prefix, one `.`
    /// and `'` digit separators.
    NumericLiteral,
    /// Exactly one character, possibly written as an escape, between `'`.
    CharLiteral,
    StringLiteral,
    /// A maximal run of `~!%^&*-+=[]\|:<>/?`.
    Operator,
    /// One of `@$(){};,.`, never merged with its neighbours.
    Punctuation,
    /// Letters, digits and `_`, not starting with a digit. Keywords are
    /// identifiers at this layer.
    Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenValue {
    Empty,
    Float(f32),
    Str(String),
    Char(char),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(text) => write!(f, "{text:?}"),
            Self::Char(c) => write!(f, "{c:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

/// A classified token. The value variant is fixed by the kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn numeric(value: f32, span: Span) -> Self {
        Self::new(TokenKind::NumericLiteral, TokenValue::Float(value), span)
    }

    pub fn char_literal(c: char, span: Span) -> Self {
        Self::new(TokenKind::CharLiteral, TokenValue::Char(c), span)
    }

    pub fn string_literal(text: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::StringLiteral, TokenValue::Str(text.into()), span)
    }

    pub fn operator(text: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Operator, TokenValue::Str(text.into()), span)
    }

    pub fn punctuation(c: char, span: Span) -> Self {
        Self::new(TokenKind::Punctuation, TokenValue::Char(c), span)
    }

    pub fn identifier(text: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Identifier, TokenValue::Str(text.into()), span)
    }

    fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Self { kind, value, span }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            TokenValue::Float(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self.value {
            TokenValue::Char(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Str(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @{}", self.kind, self.value, self.span.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_display_in_snake_case() {
        assert_eq!(TokenKind::NumericLiteral.to_string(), "numeric_literal");
        assert_eq!(TokenKind::Operator.to_string(), "operator");
    }

    #[test]
    fn constructors_pair_kind_with_value() {
        let span = Span::new(0, 1);
        assert_eq!(Token::numeric(1.5, span).as_float(), Some(1.5));
        assert_eq!(Token::char_literal('x', span).as_char(), Some('x'));
        assert_eq!(Token::punctuation('(', span).kind, TokenKind::Punctuation);
        assert_eq!(Token::operator("<<=", span).as_str(), Some("<<="));
        assert_eq!(Token::identifier("foo", span).as_char(), None);
    }

    #[test]
    fn display_shows_kind_value_and_offset() {
        let token = Token::string_literal("a\nb", Span::new(4, 6));
        assert_eq!(token.to_string(), "string_literal \"a\\nb\" @4");
        let token = Token::numeric(26.0, Span::new(0, 4));
        assert_eq!(token.to_string(), "numeric_literal 26 @0");
    }

    #[test]
    fn value_serializes_as_tagged_union() {
        let json = serde_json::to_value(Token::punctuation(';', Span::new(3, 1)))
            .expect("token serializes");
        assert_eq!(json["kind"], "punctuation");
        assert_eq!(json["value"]["type"], "char");
        assert_eq!(json["value"]["value"], ";");
    }
}
