use iced::theme;

use super::colors::*;

/// Makes text purple
pub fn accent_color_theme() -> theme::Text {
    theme::Text::Color(accent_color())
}

/// Makes text stand out for highly rated episodes
pub fn highlight_theme() -> theme::Text {
    theme::Text::Color(highlight_color())
}
