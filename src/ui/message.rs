#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // Player controls
    Play,
    Pause,
    Stop,

    // Track selection
    NextTrack,
    PreviousTrack,
    SelectTrack(usize),

    // Session
    ClearLog,
    Quit,
}
