use stateplayer::player::{MusicPlayer, Outcome, OutcomeKind, PlaybackContext, PlayerState};

type Op = fn(&mut MusicPlayer) -> Outcome;

#[test]
fn full_session_walkthrough() {
    let mut player = MusicPlayer::new("Track A");

    let steps: [(Op, &str, &str); 5] = [
        (MusicPlayer::play, "now playing: Track A", "Playing"),
        (MusicPlayer::pause, "paused: Track A", "Paused"),
        (MusicPlayer::play, "resuming: Track A", "Playing"),
        (MusicPlayer::stop, "stopped: Track A", "Stopped"),
        (MusicPlayer::stop, "already stopped", "Stopped"),
    ];

    for (op, message, status) in steps {
        assert_eq!(op(&mut player).to_string(), message);
        assert_eq!(player.status(), status);
    }

    player.set_track("Track B");
    assert_eq!(player.status(), "Stopped");
    assert_eq!(player.play().to_string(), "now playing: Track B");
}

#[test]
fn every_state_and_operation_is_total() {
    for state in PlayerState::ALL {
        let ops: [Op; 3] = [MusicPlayer::play, MusicPlayer::pause, MusicPlayer::stop];
        for op in ops {
            let mut player = MusicPlayer::new("Track A");
            player.set_state(state);

            let outcome = op(&mut player);
            assert!(!outcome.message().is_empty());
            if outcome.kind() == OutcomeKind::Warning {
                assert_eq!(player.state(), state, "warnings never transition");
            } else {
                assert_ne!(player.state(), state, "successes always transition");
            }
        }
    }
}

#[test]
fn track_changes_never_touch_state() {
    let mut player = MusicPlayer::new("Track A");
    player.play();
    player.pause();

    player.set_track("Track C");
    assert_eq!(player.status(), "Paused");
    assert_eq!(player.color(), "yellow");
    assert_eq!(player.play().to_string(), "resuming: Track C");
}
