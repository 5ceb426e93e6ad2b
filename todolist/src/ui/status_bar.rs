//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Focus};

/// Render the status bar at the bottom of the screen.
///
/// A pending notice takes the place of the key help.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (active, completed) = app.tasks().partition();
    let counts = format!("{} open, {} done", active.len(), completed.len());

    let trailing = if let Some(notice) = app.notice() {
        Span::styled(format!(" {} ", notice.message()), theme::notice())
    } else {
        let help_text = match app.focus {
            Focus::Input => "Enter: add | Tab: list | Esc: quit | ←→: move cursor",
            Focus::List => "Tab: input | ↑↓/jk: navigate | Space: toggle | d: delete | Esc: quit",
        };
        Span::styled(help_text, theme::dimmed())
    };

    let status_line = Line::from(vec![
        Span::styled(counts, theme::bold()),
        Span::raw(" | "),
        trailing,
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
