use tracing::info;

use crate::player::{outcome::Outcome, state::PlayerState, traits::PlaybackContext};

/// Holds the active [`PlayerState`] and the selected track, and forwards
/// every control operation to the active state.
#[derive(Debug, Clone)]
pub struct MusicPlayer {
    state: PlayerState,
    current_track: String,
}

impl MusicPlayer {
    pub fn new(track: impl Into<String>) -> Self {
        Self {
            state: PlayerState::Stopped,
            current_track: track.into(),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    // Selecting a track leaves the playback state alone, even mid-play.
    pub fn set_track(&mut self, track: impl Into<String>) {
        self.current_track = track.into();
        info!(track = %self.current_track, state = self.state.name(), "track selected");
    }

    pub fn play(&mut self) -> Outcome {
        let state = self.state;
        state.play(self)
    }

    pub fn pause(&mut self) -> Outcome {
        let state = self.state;
        state.pause(self)
    }

    pub fn stop(&mut self) -> Outcome {
        let state = self.state;
        state.stop(self)
    }

    pub fn status(&self) -> &'static str {
        self.state.name()
    }

    pub fn color(&self) -> &'static str {
        self.state.color_tag()
    }
}

impl PlaybackContext for MusicPlayer {
    fn set_state(&mut self, state: PlayerState) {
        self.state = state;
    }

    fn current_track(&self) -> &str {
        &self.current_track
    }
}
