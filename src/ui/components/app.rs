use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Widget},
};

use crate::{
    ui::{
        app::App,
        components::{
            controls::PlayerControls, display::PlayerDisplay, log_panel::LogPanel,
            track_selector::TrackSelector,
        },
    },
    util::colors,
};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let outer = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::SECONDARY))
            .title_top(" State Pattern: Music Player ")
            .title_bottom(" [q] quit ")
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        outer.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Percentage(40),
            ])
            .split(inner);

        PlayerDisplay::new(&self.player).render(chunks[0], buf);
        PlayerControls.render(chunks[1], buf);
        TrackSelector::new(&self.catalog, self.selected).render(chunks[2], buf);
        LogPanel::new(&self.log).render(chunks[3], buf);
    }
}
