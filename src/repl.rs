use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::diagnostic::RenderOptions;
use crate::unit;

/// Run the interactive token dumper. Each line is compiled on its own.
pub fn run_repl(options: &RenderOptions) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        let (tokens, messages) = evaluate_line(&line, options);
        print!("{tokens}");
        eprint!("{messages}");
    }
    Ok(())
}

/// Compile one line, returning the token listing and the rendered messages.
fn evaluate_line(line: &str, options: &RenderOptions) -> (String, String) {
    let unit = unit::compile("<repl>", line);
    let tokens = unit
        .tokens
        .iter()
        .map(|token| format!("{token}\n"))
        .collect();
    (tokens, unit.render_messages(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_listed_one_per_line() {
        let (tokens, messages) = evaluate_line("a <<= 0b11", &RenderOptions::plain());
        assert_eq!(
            tokens,
            "identifier \"a\" @0\noperator \"<<=\" @2\nnumeric_literal 3 @6\n"
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn errors_are_rendered_against_the_line() {
        let (tokens, messages) = evaluate_line("'ab'", &RenderOptions::plain());
        assert!(tokens.is_empty());
        assert_eq!(
            messages,
            "<repl>:1:1: error: too many characters in char literal\n 1 | 'ab'\n   | ~~^~\n"
        );
    }
}
