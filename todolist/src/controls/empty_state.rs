//! Empty-state placeholder.

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

use crate::ui::theme;

/// Build a centered, dimmed placeholder item for `message`.
#[must_use]
pub fn item(message: &str) -> ListItem<'_> {
    let line = Line::from(Span::styled(message, theme::dimmed())).centered();
    // Blank lines above and below stand in for vertical padding.
    ListItem::new(vec![Line::default(), line, Line::default()])
}
