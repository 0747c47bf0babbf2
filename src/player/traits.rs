use crate::player::state::PlayerState;

/// The surface a [`PlayerState`] sees while handling an operation.
///
/// States install their successor through `set_state`; they never hold on
/// to the context past the call.
pub trait PlaybackContext {
    fn set_state(&mut self, state: PlayerState);
    fn current_track(&self) -> &str;
}
