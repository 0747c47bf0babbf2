use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    player::{MusicPlayer, PlaybackContext},
    ui::util::get_status_icon,
    util::colors,
};

/// Current state label and the selected track.
pub struct PlayerDisplay<'a> {
    player: &'a MusicPlayer,
}

impl<'a> PlayerDisplay<'a> {
    pub fn new(player: &'a MusicPlayer) -> Self {
        Self { player }
    }
}

impl Widget for PlayerDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state_color = colors::from_tag(self.player.color());
        let icon = get_status_icon(self.player.state().is_playing());

        let status = Line::from(vec![
            Span::styled(icon, Style::new().fg(state_color)),
            Span::raw(" State: "),
            Span::styled(
                self.player.status(),
                Style::new().fg(state_color).add_modifier(Modifier::BOLD),
            ),
        ])
        .centered();

        let track = Line::from(vec![
            "♪ ".fg(colors::ACCENT),
            self.player.current_track().bold(),
        ])
        .centered();

        Paragraph::new(vec![status, track])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::new().fg(colors::NEUTRAL)),
            )
            .render(area, buf);
    }
}
