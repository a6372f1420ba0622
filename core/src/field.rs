//! Single-line text field with grapheme-aware cursor.

use unicode_segmentation::UnicodeSegmentation;

use syllabus_types::sanitize_single_line;

/// Editable single-line input. `cursor` counts grapheme clusters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    label: &'static str,
    text: String,
    cursor: usize,
}

impl TextField {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            text: String::new(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before the cursor, for placing the terminal caret.
    #[must_use]
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_index_at(self.cursor)]
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let index = self.byte_index_at(self.cursor);
        self.text.insert(index, c);
        self.cursor = self.clamp(self.cursor + 1);
    }

    /// Insert pasted text at the cursor. Line breaks and control sequences are flattened.
    pub fn insert_str(&mut self, raw: &str) {
        let clean = sanitize_single_line(raw);
        if clean.is_empty() {
            return;
        }
        let index = self.byte_index_at(self.cursor);
        self.text.insert_str(index, &clean);
        let inserted = clean.graphemes(true).count();
        self.cursor = self.clamp(self.cursor + inserted);
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Delete trailing whitespace before the cursor, then the word before it.
    pub fn delete_word_backward(&mut self) {
        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.backspace();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.backspace();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = self.clamp(self.cursor + 1);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = sanitize_single_line(text).into_owned();
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|g| g.chars().all(char::is_whitespace))
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn clamp(&self, cursor: usize) -> usize {
        cursor.min(self.grapheme_count())
    }
}
