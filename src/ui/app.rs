use std::time::Duration;

use ratatui::Frame;
use tracing::debug;

use crate::{
    config::AppConfig,
    player::{MusicPlayer, OutcomeKind, TrackCatalog},
    ui::{action_log::ActionLog, message::AppMessage, tui, util::handler::EventHandler},
};

/// One player session: the state machine plus everything the screen shows
/// around it.
pub struct App {
    pub player: MusicPlayer,
    pub catalog: TrackCatalog,
    pub selected: usize,
    pub log: ActionLog,
    pub tick_rate: Duration,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let catalog = config.catalog()?;
        let player = MusicPlayer::new(catalog.default_track());

        Ok(Self {
            player,
            catalog,
            selected: 0,
            log: ActionLog::new(config.log_capacity),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.tick_rate(self.tick_rate);
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        debug!(?msg, "update");
        match msg {
            AppMessage::Play => {
                let outcome = self.player.play();
                self.log.record(&outcome);
            }
            AppMessage::Pause => {
                let outcome = self.player.pause();
                self.log.record(&outcome);
            }
            AppMessage::Stop => {
                let outcome = self.player.stop();
                self.log.record(&outcome);
            }
            AppMessage::NextTrack => self.select_track(self.catalog.next_index(self.selected)),
            AppMessage::PreviousTrack => {
                self.select_track(self.catalog.previous_index(self.selected))
            }
            AppMessage::SelectTrack(index) => self.select_track(index),
            AppMessage::ClearLog => self.log.clear(),
            AppMessage::Quit => self.should_quit = true,
        }
    }

    /// Returns true when focus comes back, so the caller can repaint.
    pub fn set_focus(&mut self, focused: bool) -> bool {
        let regained = focused && !self.has_focus;
        self.has_focus = focused;
        regained
    }

    fn select_track(&mut self, index: usize) {
        let Some(track) = self.catalog.get(index) else {
            debug!(index, "no track at index");
            return;
        };
        self.selected = index;
        self.player.set_track(track);
        self.log
            .push(OutcomeKind::Success, format!("track changed to: {track}"));
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlaybackContext;

    fn app() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    fn messages(app: &App) -> Vec<String> {
        app.log.entries().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn controls_append_results_to_log() {
        let mut app = app();
        app.update(AppMessage::Pause);
        app.update(AppMessage::Play);
        app.update(AppMessage::Play);

        assert_eq!(
            messages(&app),
            vec!["cannot pause, stopped", "now playing: Track A", "already playing"]
        );
        assert_eq!(app.player.status(), "Playing");
    }

    #[test]
    fn selecting_a_track_keeps_state() {
        let mut app = app();
        app.update(AppMessage::Play);
        app.update(AppMessage::NextTrack);

        assert_eq!(app.selected, 1);
        assert_eq!(app.player.current_track(), "Track B");
        assert_eq!(app.player.status(), "Playing");
        assert_eq!(messages(&app).last().map(String::as_str), Some("track changed to: Track B"));
    }

    #[test]
    fn previous_wraps_to_last_track() {
        let mut app = app();
        app.update(AppMessage::PreviousTrack);
        assert_eq!(app.player.current_track(), "Track E");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut app = app();
        app.update(AppMessage::SelectTrack(9));
        assert!(app.log.is_empty());
        assert_eq!(app.player.current_track(), "Track A");
    }

    #[test]
    fn reselecting_current_track_is_logged() {
        let mut app = app();
        app.update(AppMessage::Play);
        app.update(AppMessage::SelectTrack(0));

        assert_eq!(app.log.len(), 2);
        assert_eq!(messages(&app).last().map(String::as_str), Some("track changed to: Track A"));
        assert_eq!(app.player.status(), "Playing");
    }

    #[test]
    fn focus_changes_gate_rendering() {
        let mut app = app();
        assert!(!app.set_focus(true));
        assert!(!app.set_focus(false));
        assert!(!app.has_focus);
        assert!(app.set_focus(true));
        assert!(app.has_focus);
    }

    #[test]
    fn clear_and_quit() {
        let mut app = app();
        app.update(AppMessage::Stop);
        app.update(AppMessage::ClearLog);
        assert!(app.log.is_empty());

        app.update(AppMessage::Quit);
        assert!(app.should_quit);
    }
}
