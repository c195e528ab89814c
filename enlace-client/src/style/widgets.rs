//! Widget style functions
//!
//! Consistent styling for iced widgets across the dashboard.

use iced::widget::{Container, button, container, text};
use iced::{Background, Border, Color, Fill, Theme};

use super::shaping::shaped_text;
use super::ui;
use super::{BORDER_WIDTH, STANDARD_BORDER_RADIUS, TITLE_SIZE};
use crate::types::Message;

// ============================================================================
// Button Styles
// ============================================================================

/// Navigation link style - primary background when active, transparent otherwise
pub fn nav_link_style(is_active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let ext = theme.extended_palette();
        if is_active {
            button::Style {
                background: Some(Background::Color(ext.primary.strong.color)),
                text_color: ext.primary.strong.text,
                border: rounded(),
                ..Default::default()
            }
        } else {
            button::Style {
                background: match status {
                    button::Status::Hovered => Some(Background::Color(ext.background.strong.color)),
                    _ => None,
                },
                text_color: ui::text_color(theme),
                border: rounded(),
                ..Default::default()
            }
        }
    }
}

/// HR sub-navigation link style - accent text when active
pub fn sub_nav_link_style(is_active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| button::Style {
        background: None,
        text_color: match status {
            _ if is_active => theme.palette().primary,
            button::Status::Hovered => theme.palette().primary,
            _ => ui::text_color(theme),
        },
        ..Default::default()
    }
}

/// Transparent icon-like button with primary color on hover
pub fn transparent_button_style(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => theme.palette().primary,
            button::Status::Disabled => ui::muted_text_color(theme),
            _ => ui::text_color(theme),
        },
        ..Default::default()
    }
}

/// Carousel dot style - primary when active, neutral otherwise
pub fn carousel_dot_style(is_active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let color = match status {
            _ if is_active => theme.palette().primary,
            button::Status::Hovered => ui::muted_text_color(theme),
            _ => ui::dot_inactive_color(theme),
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: f32::MAX.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Content area background style (for forms and popups)
pub fn content_background_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}

/// Modal overlay style (semi-transparent, theme-aware background)
pub fn modal_overlay_style(theme: &Theme) -> container::Style {
    let bg = theme.palette().background;
    container::Style {
        background: Some(Background::Color(Color::from_rgba(bg.r, bg.g, bg.b, 0.9))),
        ..Default::default()
    }
}

/// Modal dialog box style
pub fn modal_dialog_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        border: Border {
            color: ui::border_color(theme),
            width: BORDER_WIDTH,
            radius: STANDARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Card style for dashboard widgets and form sections
pub fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        border: Border {
            color: ui::border_color(theme),
            width: BORDER_WIDTH,
            radius: STANDARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Sidebar panel background style with border
pub fn sidebar_panel_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ui::sidebar_background(theme))),
        border: Border {
            color: ui::border_color(theme),
            width: BORDER_WIDTH,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Separator line style
pub fn separator_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ui::border_color(theme))),
        ..Default::default()
    }
}

/// Avatar circle with the primary color
pub fn avatar_style(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.primary.base.color)),
        text_color: Some(ext.primary.base.text),
        border: Border {
            radius: f32::MAX.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Highlighted calendar day (today)
pub fn today_cell_style(theme: &Theme) -> container::Style {
    avatar_style(theme)
}

/// Gallery picture frame (weak primary tint with rounded corners)
pub fn picture_frame_style(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.primary.weak.color)),
        text_color: Some(ext.primary.weak.text),
        border: rounded(),
        ..Default::default()
    }
}

/// Tooltip container style - uses iced's built-in bordered box style
pub fn tooltip_container_style(theme: &Theme) -> container::Style {
    container::bordered_box(theme)
}

// ============================================================================
// Text Styles
// ============================================================================

/// Error text style - uses danger color
pub fn error_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ui::danger_color(theme)),
    }
}

/// Success text style
pub fn success_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ui::success_color(theme)),
    }
}

/// Muted text style - for section titles and secondary info
pub fn muted_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ui::muted_text_color(theme)),
    }
}

// ============================================================================
// Panel Helpers
// ============================================================================

/// Build a panel title row
pub fn panel_title(title: impl Into<String>) -> Container<'static, Message> {
    container(shaped_text(title.into()).size(TITLE_SIZE).width(Fill))
}

fn rounded() -> Border {
    Border {
        radius: STANDARD_BORDER_RADIUS.into(),
        ..Default::default()
    }
}
