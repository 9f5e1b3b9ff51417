use crate::structures::ColorTag;
use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub pointer: Color, // Front/rear/top/head markers
    pub spent: Color,   // Linear-queue slots lost until reset
    pub index: Color,   // Slot index gutter
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    pointer: Color::Rgb(249, 226, 175),        // Yellow for pointer markers
    spent: Color::Rgb(88, 91, 112),            // Dimmed grey for spent slots
    index: Color::Rgb(108, 112, 134),          // Grey index gutter
};

/// Display color for an element's tag.
pub fn element_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::Rgb(243, 139, 168),
        ColorTag::Peach => Color::Rgb(250, 179, 135),
        ColorTag::Yellow => Color::Rgb(249, 226, 175),
        ColorTag::Green => Color::Rgb(166, 227, 161),
        ColorTag::Blue => Color::Rgb(137, 180, 250),
        ColorTag::Mauve => Color::Rgb(203, 166, 247),
    }
}
