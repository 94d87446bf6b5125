/// Single-line text editor backing the URL bar and the search bar.
///
/// `cursor` is a byte offset into `buffer` and always sits on a char
/// boundary.
#[derive(Debug, Default, Clone)]
pub struct EditState {
    pub buffer: String,
    pub cursor: usize,
}

impl EditState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn set(&mut self, content: &str) {
        self.buffer = content.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn trimmed(&self) -> &str {
        self.buffer.trim()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Removes the word before the cursor along with any whitespace between
    /// it and the cursor.
    pub fn delete_word_backward(&mut self) {
        let before = &self.buffer[..self.cursor];
        let without_space = before.trim_end();
        let word_start = without_space
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);

        self.buffer.replace_range(word_start..self.cursor, "");
        self.cursor = word_start;
    }

    /// Text before and after the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
