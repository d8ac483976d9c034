use std::path::Path;

use serde::Serialize;

use crate::diagnostic::{Diagnostics, Message, RenderOptions};
use crate::error::SourceError;
use crate::scanner::lexer;
use crate::scanner::token::Token;

/// One named source text and everything a compile pass learned about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompilationUnit {
    /// Name shown in diagnostics, usually the file name.
    pub name: String,
    #[serde(skip_serializing)]
    pub source_text: String,
    pub messages: Vec<Message>,
    pub tokens: Vec<Token>,
    pub line_count: usize,
    /// Set when the last compile finished without an error.
    pub success: bool,
}

impl CompilationUnit {
    pub fn new(name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_text: source_text.into(),
            ..Self::default()
        }
    }

    /// Load a unit from disk, named after its path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let source_text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), source_text))
    }

    /// Tokenize the source, replacing the results of any earlier pass.
    pub fn compile(&mut self) -> bool {
        tracing::debug!(name = %self.name, bytes = self.source_text.len(), "compiling");
        self.line_count = self.source_text.matches('\n').count() + 1;

        let mut diags = Diagnostics::new();
        let tokens = lexer::tokenize(&self.source_text, &mut diags);
        self.success = tokens.is_ok();
        self.tokens = tokens.unwrap_or_default();
        self.messages = diags.into_messages();

        tracing::debug!(
            name = %self.name,
            tokens = self.tokens.len(),
            messages = self.messages.len(),
            success = self.success,
            "compiled"
        );
        self.success
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity.is_fatal())
    }

    /// Render every message in order, concatenated.
    pub fn render_messages(&self, options: &RenderOptions) -> String {
        self.messages
            .iter()
            .map(|message| message.render(&self.name, &self.source_text, options))
            .collect()
    }
}

/// Build and compile a unit in one step.
pub fn compile(name: impl Into<String>, source_text: impl Into<String>) -> CompilationUnit {
    let mut unit = CompilationUnit::new(name, source_text);
    unit.compile();
    unit
}
