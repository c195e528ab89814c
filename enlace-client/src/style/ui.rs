//! Palette-derived colors

use iced::{Color, Theme};

/// Primary text color
pub fn text_color(theme: &Theme) -> Color {
    theme.palette().text
}

/// Secondary text color (section titles, hints)
pub fn muted_text_color(theme: &Theme) -> Color {
    let text = theme.palette().text;
    Color { a: 0.6, ..text }
}

/// Danger color for errors and pending items
pub fn danger_color(theme: &Theme) -> Color {
    theme.palette().danger
}

/// Success color for completed items
pub fn success_color(theme: &Theme) -> Color {
    theme.palette().success
}

/// Sidebar background (weak background shade)
pub fn sidebar_background(theme: &Theme) -> Color {
    theme.extended_palette().background.weak.color
}

/// Border color for sidebar, cards and separators
pub fn border_color(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.color
}

/// Inactive carousel dot
pub fn dot_inactive_color(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.color
}
