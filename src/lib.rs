pub mod diagnostic;
pub mod error;
pub mod repl;
pub mod scanner;
pub mod unit;

pub use diagnostic::{Message, MessageReport, Position, RenderOptions, Severity};
pub use error::SourceError;
pub use scanner::token::{Token, TokenKind, TokenValue};
pub use unit::{CompilationUnit, compile};
