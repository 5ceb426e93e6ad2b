//! Root screen: owns the task list and applies every transition.
//!
//! Children get data and callbacks only. The add-task control and the task
//! rows hand an [`Intent`] back here, and [`App::apply`] is the single place
//! the task list changes.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist_core::codec::{CodecError, SavedState};
use todolist_core::task::{TaskError, TaskId, TaskList};
use todolist_core::view::{self, DEFAULT_EMPTY_MESSAGE, ListView};

use crate::config::{ClientConfig, DEFAULT_TITLE};
use crate::controls::task_row;
use crate::controls::{AddTaskInput, InputError, RowAction};
use crate::notice::{BLANK_TASK_NOTICE, DEFAULT_NOTICE_DURATION, Notice};

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Add-task input is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// A state change requested by a child control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a task with this (already trimmed) text.
    Add(String),
    /// Set the completion state of a task.
    Toggle {
        /// Target task.
        id: TaskId,
        /// New checkbox value.
        completed: bool,
    },
    /// Remove a task.
    Delete(TaskId),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    tasks: TaskList,
    /// Add-task control state. Not part of the saved state.
    pub input: AddTaskInput,
    /// Which part is focused.
    pub focus: Focus,
    /// Selected row, as a display position in the rendered list.
    pub selected: usize,
    notice: Option<Notice>,
    notice_duration: Duration,
    title: String,
    empty_message: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a screen with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tasks(TaskList::new())
    }

    fn with_tasks(tasks: TaskList) -> Self {
        Self {
            tasks,
            input: AddTaskInput::new(),
            focus: Focus::Input,
            selected: 0,
            notice: None,
            notice_duration: DEFAULT_NOTICE_DURATION,
            title: DEFAULT_TITLE.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            should_quit: false,
        }
    }

    /// Rebuild a screen from a bundle taken by
    /// [`save_instance_state`](Self::save_instance_state).
    ///
    /// Only the task list and id counter come back; input text, focus and
    /// notices start fresh.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the bundle cannot be decoded or breaks a
    /// task list invariant.
    pub fn restore(saved: &SavedState) -> Result<Self, CodecError> {
        let tasks = saved.restore()?;
        tracing::debug!(
            tasks = tasks.len(),
            next_id = %tasks.next_id(),
            "restored instance state"
        );
        Ok(Self::with_tasks(tasks))
    }

    /// Capture the task list and id counter for a configuration change.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the list cannot be encoded.
    pub fn save_instance_state(&self) -> Result<SavedState, CodecError> {
        SavedState::capture(&self.tasks)
    }

    /// Tear this screen down and rebuild it from its saved instance state,
    /// as on a configuration change. If the round trip fails the current
    /// screen is kept.
    #[must_use]
    pub fn recreate(self, config: &ClientConfig) -> Self {
        match self
            .save_instance_state()
            .and_then(|saved| Self::restore(&saved))
        {
            Ok(restored) => restored.with_config(config),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore instance state, keeping screen");
                self
            }
        }
    }

    /// Apply the screen settings from a resolved configuration.
    #[must_use]
    pub fn with_config(self, config: &ClientConfig) -> Self {
        self.with_notice_duration(config.notice_duration)
            .with_title(&config.title)
            .with_empty_message(&config.empty_message)
    }

    /// Set how long notices stay visible.
    #[must_use]
    pub const fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Set the screen title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        title.clone_into(&mut self.title);
        self
    }

    /// Set the empty-state placeholder.
    #[must_use]
    pub fn with_empty_message(mut self, message: &str) -> Self {
        message.clone_into(&mut self.empty_message);
        self
    }

    /// The task list.
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Screen title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The notice currently showing, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Render the list projection for the current state.
    #[must_use]
    pub fn view(&self) -> ListView<'_> {
        view::render(&self.tasks, &self.empty_message)
    }

    /// Append a task with the trimmed `text`.
    ///
    /// Blank text is rejected with a notice and no state change.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        match self.tasks.add(text) {
            Ok(task) => {
                let id = task.id();
                tracing::debug!(%id, "task added");
                Some(id)
            }
            Err(TaskError::EmptyText) => {
                tracing::warn!("rejected blank task");
                self.show_notice(BLANK_TASK_NOTICE);
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "could not add task");
                self.show_notice(e.to_string());
                None
            }
        }
    }

    /// Set the completion state of the task with `id`. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: TaskId, completed: bool) {
        if self.tasks.toggle(id, completed) {
            tracing::debug!(%id, completed, "task toggled");
            // Keep the selection on the task as it moves between sections.
            let position = self.view().position_of(id);
            if let Some(position) = position {
                self.selected = position;
            }
        } else {
            tracing::debug!(%id, "toggle ignored, no such task");
        }
        self.clamp_selection();
    }

    /// Remove the task with `id`. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.tasks.remove(id).is_some() {
            tracing::debug!(%id, "task deleted");
        } else {
            tracing::debug!(%id, "delete ignored, no such task");
        }
        self.clamp_selection();
    }

    /// Apply an intent emitted by a child control.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Add(text) => {
                self.add_task(&text);
            }
            Intent::Toggle { id, completed } => self.toggle_task(id, completed),
            Intent::Delete(id) => self.delete_task(id),
        }
    }

    /// Show a transient notice, replacing any current one.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::new(message, Instant::now(), self.notice_duration));
    }

    /// Drop the notice if it has expired at `now`.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Per-loop housekeeping.
    pub fn tick(&mut self) {
        self.expire_notice(Instant::now());
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Handle key event when the input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.enter_char(c);
            }
            KeyCode::Backspace => self.input.delete_char(),
            KeyCode::Delete => self.input.delete_forward(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            _ => {}
        }
    }

    /// Handle key event when the list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ' | 'x') | KeyCode::Enter => self.activate_selected(RowAction::Toggle),
            KeyCode::Char('d') | KeyCode::Delete => self.activate_selected(RowAction::Delete),
            _ => {}
        }
    }

    /// Submit the add-task control, routing its text back as an intent.
    fn submit_input(&mut self) {
        match self.input.submit(Intent::Add) {
            Ok(intent) => self.apply(intent),
            Err(InputError::Blank) => {
                tracing::warn!("rejected blank task");
                self.show_notice(BLANK_TASK_NOTICE);
            }
        }
    }

    /// Run `action` on the selected row through the row control.
    fn activate_selected(&mut self, action: RowAction) {
        let Some(row) = self.view().row(self.selected) else {
            return;
        };
        let id = row.id;
        let intent = task_row::handle(
            row,
            action,
            |completed| Intent::Toggle { id, completed },
            || Intent::Delete(id),
        );
        self.apply(intent);
    }

    const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
    }

    const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
