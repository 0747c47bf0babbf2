use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::{player::TrackCatalog, util::colors};

pub struct TrackSelector<'a> {
    catalog: &'a TrackCatalog,
    selected: usize,
}

impl<'a> TrackSelector<'a> {
    pub fn new(catalog: &'a TrackCatalog, selected: usize) -> Self {
        Self { catalog, selected }
    }
}

impl Widget for TrackSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .catalog
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::GRAY)
                };
                ListItem::new(format!("{}. {}", i + 1, track)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::new().fg(colors::NEUTRAL))
                    .title(" Select a track [↑/↓] "),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
