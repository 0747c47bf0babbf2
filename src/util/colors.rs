use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00f7d44b);
pub const SECONDARY: Color = Color::from_u32(0x009D8400);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x00feca88);

pub const GRAY: Color = Color::from_u32(0x006b7280);
pub const GREEN: Color = Color::from_u32(0x0022c55e);
pub const YELLOW: Color = Color::from_u32(0x00eab308);
pub const RED: Color = Color::from_u32(0x00ef4444);

/// Maps a state's colour tag to the terminal palette.
pub fn from_tag(tag: &str) -> Color {
    match tag {
        "green" => GREEN,
        "yellow" => YELLOW,
        "red" => RED,
        _ => GRAY,
    }
}
