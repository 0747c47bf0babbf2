pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

/// Status dot; pulses while playing.
pub fn get_status_icon(is_playing: bool) -> &'static str {
    if is_playing {
        const FRAME_STEP_MS: u128 = 250;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        match (now / FRAME_STEP_MS) % 4 {
            0 => "·",
            1 | 3 => "•",
            _ => "●",
        }
    } else {
        "●"
    }
}
