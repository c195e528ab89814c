//! Text helpers with advanced shaping

use iced::widget::{Text, text};

/// Text widget with advanced shaping (accents and other combining marks)
pub fn shaped_text<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    text(content).shaping(text::Shaping::Advanced)
}

/// Shaped text that wraps at word boundaries
pub fn shaped_text_wrapped<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    shaped_text(content).wrapping(text::Wrapping::Word)
}
