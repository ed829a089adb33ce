use iced::{color, Color};

/// The accent color for the program
pub fn accent_color() -> Color {
    purple()
}

/// Color of the ratings of highly rated episodes
pub fn highlight_color() -> Color {
    amber()
}

pub fn purple() -> Color {
    color!(0x8f6593)
}

pub fn amber() -> Color {
    color!(0xc98a00)
}
