use std::fmt::Display;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use thiserror::Error;

use super::{Message, Severity};

/// A [`Message`] bundled with its source so miette can draw it.
#[derive(Error, Debug)]
#[error("{text}")]
pub struct MessageReport {
    text: String,
    severity: Severity,
    span: SourceSpan,
    pointer: usize,
    src: NamedSource<String>,
}

impl MessageReport {
    pub fn new(message: &Message, name: &str, source: &str) -> Self {
        // miette rejects spans that reach past the source.
        let len = source.len();
        let begin = message.pos.begin.min(len);
        let length = message.pos.length.min(len - begin);
        Self {
            text: message.text.clone(),
            severity: message.severity,
            span: SourceSpan::new(begin.into(), length),
            pointer: message.pos.pointing_to().min(len),
            src: NamedSource::new(name, source.to_string()),
        }
    }
}

impl Diagnostic for MessageReport {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new("detronade::lex"))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Note => miette::Severity::Advice,
            Severity::Warning => miette::Severity::Warning,
            Severity::Error => miette::Severity::Error,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let mut labels = vec![LabeledSpan::at_offset(self.pointer, "here")];
        if self.span.len() > 1 {
            labels.push(LabeledSpan::new_with_span(None, self.span));
        }
        Some(Box::new(labels.into_iter()))
    }
}
