//! Add-task control: a single-line input with an "Add" action.
//!
//! The control owns only its pending text. On submit it hands the trimmed
//! text to the parent through a callback and then clears itself; it never
//! sees the task list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme;

/// Label shown on the input box.
pub const INPUT_LABEL: &str = "Enter the task name";

/// Label of the submit action.
pub const SUBMIT_LABEL: &str = "Add";

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The input is empty or whitespace only.
    #[error("task name is blank")]
    Blank,
}

/// Pending input text plus a cursor counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTaskInput {
    text: String,
    cursor: usize,
}

impl AddTaskInput {
    /// Creates an empty input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Current pending text, untrimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(index, _)| index)
    }

    /// Insert a character at the cursor position.
    pub fn enter_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.text.insert(index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.text.remove(index);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_len() {
            let index = self.byte_index(self.cursor);
            self.text.remove(index);
        }
    }

    /// Move cursor left.
    pub const fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start.
    pub const fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor past the last character.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Discard the pending text.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Submit the pending text.
    ///
    /// Blank input is refused without calling `on_add` and without clearing.
    /// Otherwise `on_add` receives the trimmed text, the input is cleared,
    /// and whatever `on_add` returned is passed back.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Blank`] if the trimmed text is empty.
    pub fn submit<T>(&mut self, on_add: impl FnOnce(String) -> T) -> Result<T, InputError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(InputError::Blank);
        }
        let outcome = on_add(trimmed.to_owned());
        self.clear();
        Ok(outcome)
    }
}

/// Render the input box and the submit action side by side.
pub fn render(frame: &mut Frame, area: Rect, input: &AddTaskInput, is_focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(7)])
        .split(area);

    // Build the input text with cursor
    let mut display_text = input.text().to_owned();
    if is_focused {
        let index = input.byte_index(input.cursor());
        display_text.insert(index, '█');
    }

    let input_line = if display_text.is_empty() {
        Line::from(Span::styled(INPUT_LABEL, theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let border_style = if is_focused {
        theme::highlighted()
    } else {
        theme::normal()
    };

    let field = Paragraph::new(input_line).block(
        Block::default()
            .title(INPUT_LABEL)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(field, chunks[0]);

    let button = Paragraph::new(Line::from(SUBMIT_LABEL).centered())
        .style(theme::primary_button())
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(button, chunks[1]);
}
