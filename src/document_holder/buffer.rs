use unicode_width::UnicodeWidthStr;

/// Text surface the document holder reads from and writes to
///
/// The surface is the single source of truth for the buffer text.
pub trait BufferSurface {
    fn content(&self) -> String;
    fn set_content(&mut self, content: &str);
    fn clear(&mut self);
}

/// Multi-line text with a byte-offset cursor, used as the editing pane
///
/// The cursor always sits on a char boundary. Editing methods return whether
/// the text changed so the caller knows when to raise an input event.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    pub fn insert_newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    /// Deletes the char before the cursor
    pub fn backspace(&mut self) -> bool {
        match self.text[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    /// Deletes the char under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor += self.text[self.cursor..]
            .find('\n')
            .unwrap_or(self.text.len() - self.cursor);
    }

    /// Zero-based (line, column) of the cursor, column in terminal cells
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start()..].width();
        (line, column)
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor]
            .rfind('\n')
            .map(|index| index + 1)
            .unwrap_or(0)
    }
}

impl BufferSurface for TextBuffer {
    fn content(&self) -> String {
        self.text.clone()
    }

    fn set_content(&mut self, content: &str) {
        self.text = content.to_string();
        self.cursor = self.text.len();
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}
