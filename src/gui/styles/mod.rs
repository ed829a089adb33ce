pub mod colors;
pub mod text_styles;
