pub mod catalog;
pub mod context;
pub mod error;
pub mod outcome;
pub mod state;
pub mod traits;

pub use catalog::TrackCatalog;
pub use context::MusicPlayer;
pub use error::CatalogError;
pub use outcome::{Outcome, OutcomeKind};
pub use state::PlayerState;
pub use traits::PlaybackContext;
