use std::fmt;

use tracing::{debug, warn};

use crate::player::{outcome::Outcome, traits::PlaybackContext};

/// One of the three mutually exclusive player states.
///
/// Variants carry no data: behaviour is a pure function of the variant, the
/// operation and the context's current track. Transitions are made by
/// installing the next variant into the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlayerState {
    pub const ALL: [PlayerState; 3] = [Self::Stopped, Self::Playing, Self::Paused];

    pub fn play(self, ctx: &mut impl PlaybackContext) -> Outcome {
        match self {
            Self::Stopped => {
                Self::transition(ctx, self, Self::Playing);
                Outcome::success(format!("now playing: {}", ctx.current_track()))
            }
            Self::Playing => Self::reject("play", self, "already playing"),
            Self::Paused => {
                Self::transition(ctx, self, Self::Playing);
                Outcome::success(format!("resuming: {}", ctx.current_track()))
            }
        }
    }

    pub fn pause(self, ctx: &mut impl PlaybackContext) -> Outcome {
        match self {
            Self::Stopped => Self::reject("pause", self, "cannot pause, stopped"),
            Self::Playing => {
                Self::transition(ctx, self, Self::Paused);
                Outcome::success(format!("paused: {}", ctx.current_track()))
            }
            Self::Paused => Self::reject("pause", self, "already paused"),
        }
    }

    pub fn stop(self, ctx: &mut impl PlaybackContext) -> Outcome {
        match self {
            Self::Stopped => Self::reject("stop", self, "already stopped"),
            Self::Playing | Self::Paused => {
                Self::transition(ctx, self, Self::Stopped);
                Outcome::success(format!("stopped: {}", ctx.current_track()))
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }

    /// Display colour identifier, consumed only by the UI.
    pub fn color_tag(self) -> &'static str {
        match self {
            Self::Stopped => "gray",
            Self::Playing => "green",
            Self::Paused => "yellow",
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    fn transition(ctx: &mut impl PlaybackContext, from: Self, to: Self) {
        debug!(from = from.name(), to = to.name(), track = ctx.current_track(), "state transition");
        ctx.set_state(to);
    }

    fn reject(op: &'static str, state: Self, message: &'static str) -> Outcome {
        warn!(op, state = state.name(), "operation ignored");
        Outcome::warning(message)
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::outcome::OutcomeKind;

    struct Ctx {
        state: PlayerState,
        track: String,
    }

    impl PlaybackContext for Ctx {
        fn set_state(&mut self, state: PlayerState) {
            self.state = state;
        }

        fn current_track(&self) -> &str {
            &self.track
        }
    }

    fn ctx(state: PlayerState) -> Ctx {
        Ctx {
            state,
            track: "Track A".to_string(),
        }
    }

    #[test]
    fn default_is_stopped() {
        assert_eq!(PlayerState::default(), PlayerState::Stopped);
    }

    #[test]
    fn transition_table() {
        use OutcomeKind::*;
        use PlayerState::*;

        type Op = fn(PlayerState, &mut Ctx) -> Outcome;
        let play: Op = |s, c| s.play(c);
        let pause: Op = |s, c| s.pause(c);
        let stop: Op = |s, c| s.stop(c);

        let cases: [(PlayerState, Op, PlayerState, OutcomeKind, &str); 9] = [
            (Stopped, play, Playing, Success, "now playing: Track A"),
            (Stopped, pause, Stopped, Warning, "cannot pause, stopped"),
            (Stopped, stop, Stopped, Warning, "already stopped"),
            (Playing, play, Playing, Warning, "already playing"),
            (Playing, pause, Paused, Success, "paused: Track A"),
            (Playing, stop, Stopped, Success, "stopped: Track A"),
            (Paused, play, Playing, Success, "resuming: Track A"),
            (Paused, pause, Paused, Warning, "already paused"),
            (Paused, stop, Stopped, Success, "stopped: Track A"),
        ];

        for (from, op, to, kind, message) in cases {
            let mut c = ctx(from);
            let outcome = op(from, &mut c);
            assert_eq!(c.state, to, "{from} -> expected {to}");
            assert_eq!(outcome.kind(), kind, "{from}: {message}");
            assert_eq!(outcome.message(), message);
        }
    }

    #[test]
    fn rejected_operations_do_not_touch_context() {
        struct Strict;

        impl PlaybackContext for Strict {
            fn set_state(&mut self, state: PlayerState) {
                panic!("unexpected transition to {state}");
            }

            fn current_track(&self) -> &str {
                "unused"
            }
        }

        assert!(PlayerState::Stopped.pause(&mut Strict).is_warning());
        assert!(PlayerState::Stopped.stop(&mut Strict).is_warning());
        assert!(PlayerState::Playing.play(&mut Strict).is_warning());
        assert!(PlayerState::Paused.pause(&mut Strict).is_warning());
    }

    #[test]
    fn labels_and_colors() {
        let labels: Vec<_> = PlayerState::ALL.iter().map(|s| (s.name(), s.color_tag())).collect();
        assert_eq!(
            labels,
            vec![("Stopped", "gray"), ("Playing", "green"), ("Paused", "yellow")]
        );
        assert_eq!(PlayerState::Paused.to_string(), "Paused");
    }
}
