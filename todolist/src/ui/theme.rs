//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Primary action color.
pub const PRIMARY: Color = Color::Rgb(103, 80, 164);

/// Row background.
pub const SURFACE: Color = Color::Reset;

/// Emphasized row background for completed tasks.
pub const SURFACE_VARIANT: Color = Color::Rgb(60, 60, 72);

/// Success/done indicator color.
pub const SUCCESS: Color = Color::Green;

/// Warning indicator color.
pub const WARNING: Color = Color::Yellow;

/// Error/destructive indicator color.
pub const ERROR: Color = Color::Red;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, help).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Screen title style.
#[must_use]
pub fn title() -> Style {
    Style::default()
        .fg(FG_PRIMARY)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Section heading style.
#[must_use]
pub fn heading() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Style for the submit action.
#[must_use]
pub fn primary_button() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Row background for open tasks.
#[must_use]
pub fn surface() -> Style {
    Style::default().bg(SURFACE)
}

/// Row background for completed tasks.
#[must_use]
pub fn surface_variant() -> Style {
    Style::default().bg(SURFACE_VARIANT)
}

/// Checkbox style for a completion state.
#[must_use]
pub fn checkbox(completed: bool) -> Style {
    if completed {
        Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
    } else {
        normal()
    }
}

/// Style for the delete action glyph.
#[must_use]
pub fn delete_action() -> Style {
    Style::default().fg(ERROR)
}

/// Style for transient notices.
#[must_use]
pub fn notice() -> Style {
    Style::default().fg(Color::Black).bg(WARNING)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}
