//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing source files
//! and computing line/column information from byte offsets.

use std::sync::Arc;

use super::{FileId, Span};

/// A source file with its content and metadata.
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to a 1-indexed `(line, column)` pair.
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                let line = insert_point - 1;
                let line_start = self.line_starts.get(line).copied().unwrap_or(0);
                let col = offset - line_start + 1;
                (line + 1, col)
            }
        }
    }

    pub fn line_at_offset(&self, offset: usize) -> Option<&str> {
        let (line, _) = self.offset_to_line_col(offset);
        self.line_at(line)
    }

    /// Get a specific source line, 1-indexed and stripped of its trailing newline.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line.checked_sub(1)?)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        let line_content = &self.content[start..end];
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Panics if `range` is out of bounds or not on character boundaries.
    pub fn extract(&self, range: std::ops::Range<usize>) -> &str {
        &self.content[range]
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// Holds the single source file being compiled (and, in principle, any
/// number of others), assigning each a stable [`FileId`].
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Render a span as a `rustc`-style source snippet with a caret underline.
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let start_line = span.line;
        let start_col = span.column;

        let line = file.line_at(start_line as usize)?;
        let line_num_width = file.line_count().to_string().len().max(3);

        let mut result = String::new();
        result.push_str(&format!("--> {}:{}:{}\n", file.name(), start_line, start_col));
        result.push_str(&format!("{:>width$} | {}\n", start_line, line, width = line_num_width));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = (start_col as usize).saturating_sub(1);
        let underline_len = if span.start == span.end {
            1
        } else {
            (span.end - span.start).max(1)
        };

        for _ in 0..underline_start {
            result.push(' ');
        }
        for _ in 0..underline_len {
            result.push('^');
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_file_basics() {
        let file = SourceFile::new(0, "test.pix", "fun main() {}");
        assert_eq!(file.id().0, 0);
        assert_eq!(file.name(), "test.pix");
        assert_eq!(file.content(), "fun main() {}");
    }

    #[test]
    fn line_indexing() {
        let file = SourceFile::new(0, "test.pix", "line1\nline2\nline3");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.line_start(1), Some(6));
        assert_eq!(file.line_at(2), Some("line2"));
        assert_eq!(file.line_at(4), None);
    }

    #[test]
    fn offset_to_line_col() {
        let file = SourceFile::new(0, "test.pix", "fun main() {}");
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.offset_to_line_col(4), (1, 5));
    }

    #[test]
    fn extract_substring() {
        let file = SourceFile::new(0, "test.pix", "fun main() {}");
        assert_eq!(file.extract(0..3), "fun");
    }

    #[test]
    fn source_map_roundtrip() {
        let mut map = SourceMap::new();
        let id = map.add_file("main.pix", "let x: int = 1;");
        assert_eq!(map.file_count(), 1);
        assert_eq!(map.get(id).unwrap().name(), "main.pix");
        assert!(map.get(FileId(1)).is_none());
    }

    #[test]
    fn format_span_contains_source_context() {
        let mut map = SourceMap::new();
        let file_id = map.add_file("main.pix", "let x: int = 1;");
        let span = Span::with_file(0, 3, file_id, 1, 1);
        let formatted = map.format_span(span).unwrap();
        assert!(formatted.contains("main.pix"));
        assert!(formatted.contains("let x"));
    }

    #[test]
    fn empty_file() {
        let file = SourceFile::new(0, "empty.pix", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.offset_to_line_col(0), (1, 1));
    }
}
