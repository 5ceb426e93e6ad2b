//! Terminal UI rendering.

pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::controls::add_task;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Add-task control
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(app.title(), theme::title())));
    frame.render_widget(title, chunks[0]);

    add_task::render(frame, chunks[1], &app.input, app.focus == Focus::Input);
    task_list::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);
}
