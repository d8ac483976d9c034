use super::Severity;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    /// The `name:line:col` locator and the faulty source text.
    Emphasis,
    Severity(Severity),
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Self::Emphasis => "\x1b[1;37m",                    // Bold white
            Self::Severity(Severity::Note) => "\x1b[1;36m",    // Bold cyan
            Self::Severity(Severity::Warning) => "\x1b[1;35m", // Bold magenta
            Self::Severity(Severity::Error) => "\x1b[1;31m",   // Bold red
        }
    }
}

/// Wraps text in ANSI escapes, or passes it through when color is off.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Painter {
    color: bool,
}

impl Painter {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }

    pub(crate) fn paint(&self, style: Style, text: &str) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", style.code(), text, RESET)
    }
}
