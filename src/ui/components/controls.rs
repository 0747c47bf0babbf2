use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::util::colors;

pub struct PlayerControls;

impl Widget for PlayerControls {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let controls: Vec<Span> = vec![
            "[p] ".fg(colors::NEUTRAL),
            "▶ Play".fg(colors::GREEN).bold(),
            "   [space] ".fg(colors::NEUTRAL),
            "⏸ Pause".fg(colors::YELLOW).bold(),
            "   [s] ".fg(colors::NEUTRAL),
            "■ Stop".fg(colors::RED).bold(),
        ];

        Paragraph::new(Line::from(controls).centered()).render(area, buf);
    }
}
