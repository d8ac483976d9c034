pub mod render;
pub mod report;
mod style;

use serde::Serialize;

pub use render::{RenderOptions, locate, render};
pub use report::MessageReport;

/// A span of source text with a pointer at the most relevant character.
///
/// `begin` is an absolute byte offset, `pointer` is relative to `begin` and
/// never exceeds `length`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub begin: usize,
    pub length: usize,
    pub pointer: usize,
}

impl Position {
    pub fn new(begin: usize, length: usize, pointer: usize) -> Self {
        Self {
            begin,
            length,
            pointer: pointer.min(length),
        }
    }

    /// A one-character span pointing at its only character.
    pub fn at(offset: usize) -> Self {
        Self::new(offset, 1, 0)
    }

    /// Absolute offset one past the span.
    pub fn end(&self) -> usize {
        self.begin + self.length
    }

    /// Absolute offset of the pointed-at character.
    pub fn pointing_to(&self) -> usize {
        self.begin + self.pointer
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl Severity {
    /// Errors abort tokenization; notes and warnings do not.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    pub pos: Position,
}

impl Message {
    pub fn new(severity: Severity, text: impl Into<String>, pos: Position) -> Self {
        Self {
            text: text.into(),
            severity,
            pos,
        }
    }

    pub fn error(text: impl Into<String>, pos: Position) -> Self {
        Self::new(Severity::Error, text, pos)
    }

    pub fn warning(text: impl Into<String>, pos: Position) -> Self {
        Self::new(Severity::Warning, text, pos)
    }

    pub fn note(text: impl Into<String>, pos: Position) -> Self {
        Self::new(Severity::Note, text, pos)
    }

    /// Format against the unit's source, see [`render::render`].
    pub fn render(&self, name: &str, source: &str, options: &RenderOptions) -> String {
        render::render(self, name, source, options)
    }
}

/// Returned in place of a value once a fatal message has been recorded.
///
/// Callers propagate it with `?` and never record a second message for the
/// same failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

pub type Scan<T> = Result<T, Halt>;

/// Append-only message list shared by every stage of one tokenization pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<Message>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Record an error and hand back the sentinel to return.
    pub fn fatal(&mut self, text: impl Into<String>, pos: Position) -> Halt {
        let message = Message::error(text, pos);
        tracing::debug!(text = %message.text, begin = pos.begin, "fatal lexical error");
        self.push(message);
        Halt
    }

    pub fn warn(&mut self, text: impl Into<String>, pos: Position) {
        self.push(Message::warning(text, pos));
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity.is_fatal())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
