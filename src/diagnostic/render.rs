use std::fmt::Write;

use super::style::{Painter, Style};
use super::{Message, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI escapes around the locator, severity label and fault text.
    pub color: bool,
    /// Unannotated source lines shown before and after the annotated ones.
    pub context: usize,
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn colored() -> Self {
        Self {
            color: true,
            ..Self::default()
        }
    }

    pub fn with_context(self, context: usize) -> Self {
        Self { context, ..self }
    }
}

/// 1-based line and column of a byte offset, clamped to the end of `source`.
pub fn locate(source: &str, offset: usize) -> (usize, usize) {
    let before = &source.as_bytes()[..offset.min(source.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, before.len() - line_start + 1)
}

/// Format `message` as a `name:line:col: severity: text` header followed by
/// every source line its span touches, each with an underline row.
pub fn render(message: &Message, name: &str, source: &str, options: &RenderOptions) -> String {
    let painter = Painter::new(options.color);
    let severity = Style::Severity(message.severity);
    let (line, column) = locate(source, message.pos.begin);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {}: {}",
        painter.paint(Style::Emphasis, &format!("{name}:{line}:{column}")),
        painter.paint(severity, &message.severity.to_string()),
        message.text
    );
    out.push_str(&excerpt(message.pos, source, options, painter, severity));
    out
}

/// Underline layout of one line, in byte columns from the line start.
///
/// `end` may be one past the line's text when the span covers its newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineMarks {
    start: usize,
    end: usize,
    pointer: Option<usize>,
}

impl LineMarks {
    fn compute(pos: Position, line_start: usize, line_len: usize, is_last: bool) -> Option<Self> {
        // One past the newline that terminates this line.
        let slot_end = line_start + line_len + 1;
        let end = pos.end();
        if pos.begin >= slot_end || end <= line_start {
            return None;
        }

        let start = pos.begin.saturating_sub(line_start);
        let end_col = (end - line_start).min(line_len + 1);
        if end_col <= start {
            return None;
        }

        // A pointer just past a span that stops at this line's boundary is
        // drawn here, since no later line will be annotated.
        let pointing = pos.pointing_to();
        let pointer = (pointing >= line_start
            && (pointing < slot_end || is_last || end <= slot_end))
            .then(|| (pointing - line_start).min(line_len));

        Some(Self {
            start,
            end: end_col,
            pointer,
        })
    }
}

fn excerpt(
    pos: Position,
    source: &str,
    options: &RenderOptions,
    painter: Painter,
    severity: Style,
) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let last = lines.len() - 1;
    let width = lines.len().to_string().len();

    let mut line_start = 0;
    let marks: Vec<Option<LineMarks>> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let marks = LineMarks::compute(pos, line_start, line.len(), i == last);
            line_start += line.len() + 1;
            marks
        })
        .collect();

    let Some(first) = marks.iter().position(Option::is_some) else {
        return String::new();
    };
    let last_marked = marks.iter().rposition(Option::is_some).unwrap_or(first);
    let from = first.saturating_sub(options.context);
    let to = last_marked.saturating_add(options.context).min(last);

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate().take(to + 1).skip(from) {
        let gutter = format!(" {:>width$} |", i + 1);
        match marks[i] {
            Some(line_marks) => {
                let (text, squiggles) = underline(line, line_marks, painter, severity);
                push_row(&mut out, &gutter, &text);
                push_row(&mut out, &format!(" {:width$} |", ""), &squiggles);
            }
            None => push_row(&mut out, &gutter, line),
        }
    }
    out
}

fn push_row(out: &mut String, gutter: &str, body: &str) {
    out.push_str(gutter);
    if !body.is_empty() {
        out.push(' ');
        out.push_str(body);
    }
    out.push('\n');
}

/// Build the source row and the squiggle row for one annotated line.
fn underline(line: &str, marks: LineMarks, painter: Painter, severity: Style) -> (String, String) {
    let start = floor_boundary(line, marks.start);
    let stop = floor_boundary(line, marks.end).max(start);

    let mut text = line[..start].to_string();
    let mut squiggles: String = line[..start]
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    let rest = match marks.pointer {
        Some(pointer) => {
            let p = floor_boundary(line, pointer).max(start);
            let point_len = line[p..].chars().next().map_or(0, char::len_utf8);
            let after_start = p + point_len;
            let before = &line[start..p];
            let after = line.get(after_start..stop).unwrap_or("");

            text.push_str(&painter.paint(Style::Emphasis, before));
            text.push_str(&painter.paint(severity, &line[p..after_start]));
            text.push_str(&painter.paint(Style::Emphasis, after));

            let glyphs = format!("{}^{}", tildes(before), tildes(after));
            squiggles.push_str(&painter.paint(severity, &glyphs));
            stop.max(after_start)
        }
        None => {
            let fault = &line[start..stop];
            text.push_str(&painter.paint(Style::Emphasis, fault));
            squiggles.push_str(&painter.paint(severity, &tildes(fault)));
            stop
        }
    };
    text.push_str(&line[rest..]);
    (text, squiggles)
}

fn tildes(segment: &str) -> String {
    "~".repeat(segment.chars().count())
}

fn floor_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
