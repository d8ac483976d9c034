/// Returned for every index at or past the end of the source.
pub const EOF: char = '\0';

/// Read-only view over source text that never panics on an index.
///
/// Scan loops can look ahead freely: once they run off the end they see
/// [`EOF`], which belongs to no character class and so ends every run.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'src> {
    text: &'src str,
}

impl<'src> Cursor<'src> {
    pub fn new(text: &'src str) -> Self {
        Self { text }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_past_end(&self, index: usize) -> bool {
        index >= self.text.len()
    }

    /// The byte at `index` as a character, or [`EOF`].
    pub fn at(&self, index: usize) -> char {
        self.text
            .as_bytes()
            .get(index)
            .map_or(EOF, |&byte| char::from(byte))
    }

    /// The whole UTF-8 character starting at `index`, or [`EOF`].
    pub fn char_at(&self, index: usize) -> char {
        self.text
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOF)
    }

    /// Text between two byte offsets, clamped to the source.
    pub fn slice(&self, begin: usize, end: usize) -> &'src str {
        let end = end.min(self.text.len());
        self.text.get(begin.min(end)..end).unwrap_or("")
    }

    /// End of the maximal run starting at `from` whose characters satisfy
    /// `accept`. A run never extends past the end of the source.
    pub fn run_while(&self, from: usize, accept: impl Fn(char) -> bool) -> usize {
        let mut index = from;
        while !self.is_past_end(index) && accept(self.at(index)) {
            index += 1;
        }
        index
    }
}
