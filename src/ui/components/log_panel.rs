use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::{
    player::OutcomeKind,
    ui::action_log::ActionLog,
    util::colors,
};

/// Most recent action log entries, oldest at the top.
pub struct LogPanel<'a> {
    log: &'a ActionLog,
}

impl<'a> LogPanel<'a> {
    pub fn new(log: &'a ActionLog) -> Self {
        Self { log }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
            .title(" Action Log ")
            .title_bottom(Line::from(" [c] clear ").right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.log.is_empty() {
            Line::from("No actions recorded yet...".fg(colors::GRAY)).render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let skip = self.log.len().saturating_sub(visible);
        let items: Vec<ListItem> = self
            .log
            .entries()
            .skip(skip)
            .map(|entry| {
                let color = match entry.kind {
                    OutcomeKind::Success => colors::GREEN,
                    OutcomeKind::Warning => colors::YELLOW,
                };
                ListItem::new(Line::from(vec![
                    Span::styled(entry.timestamp(), Style::new().fg(colors::NEUTRAL)),
                    Span::raw(" "),
                    Span::styled(entry.message.as_str(), Style::new().fg(color)),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
