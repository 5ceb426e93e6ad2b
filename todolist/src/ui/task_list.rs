//! Task list rendering: paints the projected list view.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use todolist_core::view::Node;

use super::theme;
use crate::app::{App, Focus};
use crate::controls::{empty_state, task_row};

/// Render the scrollable task list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::List;
    let view = app.view();

    let items: Vec<ListItem> = view
        .nodes()
        .iter()
        .map(|node| match *node {
            Node::Heading(text) => ListItem::new(Line::from(Span::styled(text, theme::heading()))),
            Node::Row(row) => task_row::item(row),
            Node::Empty(message) => empty_state::item(message),
            Node::Spacer => ListItem::new(Line::default()),
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected());

    // Only show the selection while the list has focus; the offset still
    // scrolls to keep the selected row visible.
    let mut state = ListState::default();
    if is_focused {
        state.select(view.node_index_of_row(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
