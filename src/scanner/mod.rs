pub mod cursor;
pub mod escape;
pub mod lexer;
pub mod literal;
pub mod number;
pub mod token;

use crate::diagnostic::{Diagnostics, Message};
use token::Token;

/// Scan source code into a list of tokens.
///
/// Warnings are dropped on success; compile a
/// [`CompilationUnit`](crate::unit::CompilationUnit) to keep them.
pub fn scan(source: &str) -> Result<Vec<Token>, Vec<Message>> {
    let mut diags = Diagnostics::new();
    lexer::tokenize(source, &mut diags).map_err(|_| diags.into_messages())
}
