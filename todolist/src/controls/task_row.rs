//! Task row control. A pure function of the row and two callbacks.

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};
use todolist_core::view::RowView;

use crate::ui::theme;

/// Glyph for the delete action.
pub const DELETE_GLYPH: &str = "✕";

/// What the user did on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Flip the checkbox.
    Toggle,
    /// Press the delete action.
    Delete,
}

/// Route `action` on `row` to the matching callback.
///
/// Toggling passes the new checkbox value; deleting passes nothing since the
/// caller's closure already knows which task it belongs to.
pub fn handle<T>(
    row: RowView<'_>,
    action: RowAction,
    on_toggle: impl FnOnce(bool) -> T,
    on_delete: impl FnOnce() -> T,
) -> T {
    match action {
        RowAction::Toggle => on_toggle(!row.completed),
        RowAction::Delete => on_delete(),
    }
}

/// Checkbox glyph for a completion state.
#[must_use]
pub const fn checkbox(completed: bool) -> &'static str {
    if completed { "[✓]" } else { "[ ]" }
}

/// Build the list item for `row`.
#[must_use]
pub fn item(row: RowView<'_>) -> ListItem<'_> {
    let line = Line::from(vec![
        Span::styled(checkbox(row.completed), theme::checkbox(row.completed)),
        Span::raw(" "),
        Span::styled(row.text, theme::normal()),
        Span::raw("  "),
        Span::styled(DELETE_GLYPH, theme::delete_action()),
    ]);

    let style = if row.emphasized() {
        theme::surface_variant()
    } else {
        theme::surface()
    };

    ListItem::new(line).style(style)
}
